//! # Landing Page Logic
//!
//! Everything about the sneaker landing page that does not need a browser.
//! The `storefront-web` crate renders it with Leptos; this crate owns the
//! state, the rules and the timing.
//!
//! ## Structure
//!
//! - **[`model`]**: page state values ([`model::Section`], [`model::HexColor`], [`model::PageState`])
//! - **[`viewport`]**: the viewport classifier ([`viewport::DeviceClass`])
//! - **[`sequencer`]**: the timer-driven hide/change/show state machine
//! - **[`layout`]**: the presentation composer, state in, classes and props out
//! - **[`content`]**: copy for each section
//! - **[`config`]**: breakpoints, timings and palette
//! - **[`error`]**: [`error::LandingError`]
//! - **[`utils`]**: class string helpers
//!
//! ## Usage
//!
//! ```rust
//! use shared::layout::compose;
//! use shared::model::HexColor;
//! use shared::sequencer::VisibilitySequencer;
//! use shared::viewport::DeviceClass;
//!
//! let mut seq = VisibilitySequencer::default();
//! let timer = seq.change_color(HexColor::black()).unwrap();
//! assert_eq!(timer.delay_ms, 350);
//!
//! let layout = compose(&seq.snapshot(DeviceClass::from_width(1280.0)));
//! assert!(!layout.viewer.visible);
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod layout;
pub mod model;
pub mod sequencer;
pub mod utils;
pub mod viewport;

pub use error::{LandingError, Result};
