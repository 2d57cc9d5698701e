//! Product color values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LandingError;

/// A hex color, always stored as lowercase `#rrggbb`.
///
/// Short `#rgb` input is expanded, so `#FFF` and `#ffffff` compare equal.
///
/// ```rust
/// use shared::model::HexColor;
///
/// let white: HexColor = "#FFF".parse().unwrap();
/// assert_eq!(white, HexColor::white());
/// assert_eq!(white.as_str(), "#ffffff");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn white() -> Self {
        HexColor("#ffffff".to_string())
    }

    pub fn black() -> Self {
        HexColor("#000000".to_string())
    }

    pub fn parse(raw: &str) -> Result<Self, LandingError> {
        let invalid = || LandingError::InvalidColor(raw.to_string());
        let digits = raw.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let expanded = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
            6 => digits.to_string(),
            _ => return Err(invalid()),
        };
        Ok(HexColor(format!("#{}", expanded.to_ascii_lowercase())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Red, green and blue channels.
    pub fn rgb(&self) -> (u8, u8, u8) {
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }

    /// Perceived brightness above the midpoint (ITU-R BT.601 weights).
    ///
    /// Used to pick a contrasting ring around light swatches.
    pub fn is_light(&self) -> bool {
        let (r, g, b) = self.rgb();
        let luma = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
        luma > 186.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        HexColor::white()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for HexColor {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexColor::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = LandingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HexColor::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}
