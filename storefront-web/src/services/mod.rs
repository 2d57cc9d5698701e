//! Browser-side services: timers and viewport observation.

pub mod timers;
pub mod viewport;
