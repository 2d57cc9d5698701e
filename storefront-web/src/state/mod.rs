//! Reactive page state

pub mod page;
