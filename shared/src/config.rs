//! # Page Configuration
//!
//! Breakpoints, transition timings and the color palette. The defaults are the
//! values the page was designed with; a JSON document can override any subset
//! of them.
//!
//! ## Global Config Access
//!
//! ```rust
//! use shared::config::{init_config, landing_config, LandingConfig};
//!
//! let config = LandingConfig::from_json(r#"{ "timings": { "color_hide": 300 } }"#).unwrap();
//! init_config(config).unwrap();
//! assert_eq!(landing_config().timings.color_hide, 300);
//! assert_eq!(landing_config().timings.color_reveal, 400);
//! ```
//!
//! Unlike a server config there is nothing that must be present, so
//! [`landing_config()`] falls back to the defaults when [`init_config()`] was
//! never called.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{LandingError, Result};
use crate::model::{HexColor, Section};

/// Viewport width thresholds, in CSS pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Widths strictly below this are mobile.
    pub mobile_max_exclusive: f64,
    /// Widths up to and including this (and not mobile) are tablet.
    pub tablet_max_inclusive: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max_exclusive: 768.0,
            tablet_max_inclusive: 1024.0,
        }
    }
}

/// Transition delays in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// From first activation until the model is revealed.
    pub initial_reveal: u32,
    /// Hide -> section commit.
    pub section_hide: u32,
    /// Section commit -> reveal.
    pub section_reveal: u32,
    /// Hide -> color commit.
    pub color_hide: u32,
    /// Color commit -> reveal.
    pub color_reveal: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            initial_reveal: 1000,
            section_hide: 500,
            section_reveal: 800,
            color_hide: 350,
            color_reveal: 400,
        }
    }
}

/// One color picker entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    pub name: String,
    pub hex: String,
}

impl Swatch {
    fn new(name: &str, hex: &str) -> Self {
        Self {
            name: name.to_string(),
            hex: hex.to_string(),
        }
    }

    pub fn color(&self) -> Result<HexColor> {
        HexColor::parse(&self.hex)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub breakpoints: Breakpoints,
    pub timings: Timings,
    pub palette: Vec<Swatch>,
    pub default_section: Section,
    pub default_color: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            timings: Timings::default(),
            palette: vec![
                Swatch::new("White", "#ffffff"),
                Swatch::new("Black", "#000000"),
                Swatch::new("University Red", "#c8102e"),
                Swatch::new("Royal Blue", "#1d4ed8"),
                Swatch::new("Pine Green", "#166534"),
            ],
            default_section: Section::Releases,
            default_color: "#ffffff".to_string(),
        }
    }
}

impl LandingConfig {
    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LandingConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let bp = &self.breakpoints;
        if bp.mobile_max_exclusive <= 0.0 {
            return Err(LandingError::Config(
                "mobile breakpoint must be positive".to_string(),
            ));
        }
        if bp.tablet_max_inclusive < bp.mobile_max_exclusive {
            return Err(LandingError::Config(format!(
                "tablet breakpoint {} is below mobile breakpoint {}",
                bp.tablet_max_inclusive, bp.mobile_max_exclusive
            )));
        }

        let t = &self.timings;
        let delays = [
            ("initial_reveal", t.initial_reveal),
            ("section_hide", t.section_hide),
            ("section_reveal", t.section_reveal),
            ("color_hide", t.color_hide),
            ("color_reveal", t.color_reveal),
        ];
        if let Some((name, _)) = delays.iter().find(|(_, ms)| *ms == 0) {
            return Err(LandingError::Config(format!("{} must be greater than 0", name)));
        }

        if self.palette.is_empty() {
            return Err(LandingError::Config("palette must not be empty".to_string()));
        }
        for swatch in &self.palette {
            swatch.color()?;
        }
        self.initial_color()?;

        Ok(())
    }

    pub fn initial_color(&self) -> Result<HexColor> {
        HexColor::parse(&self.default_color)
    }

    /// Palette entries with parsed colors, skipping any that fail to parse.
    pub fn swatches(&self) -> Vec<(String, HexColor)> {
        self.palette
            .iter()
            .filter_map(|swatch| swatch.color().ok().map(|color| (swatch.name.clone(), color)))
            .collect()
    }
}

static CONFIG: OnceLock<LandingConfig> = OnceLock::new();

/// Initialize the global configuration.
///
/// # Errors
///
/// Fails if the config does not validate or was already initialized.
pub fn init_config(config: LandingConfig) -> Result<()> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| LandingError::Config("config has already been initialized".to_string()))
}

/// The global configuration, or the defaults if none was initialized.
pub fn landing_config() -> &'static LandingConfig {
    static DEFAULT: OnceLock<LandingConfig> = OnceLock::new();
    CONFIG
        .get()
        .unwrap_or_else(|| DEFAULT.get_or_init(LandingConfig::default))
}
