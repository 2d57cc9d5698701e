//! Application constants

/// Splash element in index.html, hidden once the app mounts.
pub const LOADING_ELEMENT_ID: &str = "page-loading";

/// Page configuration shipped with the bundle.
pub const EMBEDDED_CONFIG: &str = include_str!("../../landing.json");

// Background decoration
pub const BACKGROUND_ORB_COUNT: usize = 12;

#[cfg(test)]
mod tests {
    use super::*;
    use shared::config::LandingConfig;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = LandingConfig::from_json(EMBEDDED_CONFIG).unwrap();
        assert_eq!(config.timings, shared::config::Timings::default());
        assert_eq!(config.breakpoints, shared::config::Breakpoints::default());
        assert!(!config.swatches().is_empty());
    }
}
