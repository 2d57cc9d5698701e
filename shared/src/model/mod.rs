//! # Page Data Model
//!
//! Transient UI state values. Nothing here is persisted.
//!
//! - [`Section`] - which content block is active
//! - [`HexColor`] - the selected product color
//! - [`PageState`] - everything the page renders from, owned by the controller
//!
//! The device class lives in [`crate::viewport`] since it is derived, never set.

pub mod color;
pub mod section;
pub mod state;

pub use color::HexColor;
pub use section::Section;
pub use state::PageState;
