//! # Error Handling
//!
//! [`LandingError`] is the single error type of the page logic. Errors only
//! come from parsing configuration and user-supplied strings; the page itself
//! never surfaces them, callers log and fall back to defaults.
//!
//! ```rust
//! use shared::error::{LandingError, Result};
//! use shared::model::HexColor;
//!
//! fn parse(raw: &str) -> Result<HexColor> {
//!     raw.parse()
//! }
//!
//! assert!(matches!(parse("blue"), Err(LandingError::InvalidColor(_))));
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, LandingError>`.
pub type Result<T> = std::result::Result<T, LandingError>;

#[derive(Debug, Error)]
pub enum LandingError {
    /// A color string that is not `#rgb` or `#rrggbb`.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A section id that does not name any known section.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Configuration values that parse but make no sense together.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
