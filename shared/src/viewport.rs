//! # Viewport Classifier
//!
//! Maps the viewport width to a responsive [`DeviceClass`]. The web crate
//! calls [`DeviceClass::classify`] on mount and on every window resize.
//!
//! | width            | class   |
//! |------------------|---------|
//! | `w < 768`        | Mobile  |
//! | `768 <= w <= 1024` | Tablet  |
//! | `w > 1024`       | Desktop |

use serde::{Deserialize, Serialize};

use crate::config::Breakpoints;

/// Responsive breakpoint category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceClass {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl DeviceClass {
    pub fn classify(width: f64, breakpoints: &Breakpoints) -> Self {
        if width < breakpoints.mobile_max_exclusive {
            DeviceClass::Mobile
        } else if width <= breakpoints.tablet_max_inclusive {
            DeviceClass::Tablet
        } else {
            DeviceClass::Desktop
        }
    }

    /// Classify with the default 768/1024 breakpoints.
    pub fn from_width(width: f64) -> Self {
        Self::classify(width, &Breakpoints::default())
    }

    pub fn is_mobile(&self) -> bool {
        matches!(self, DeviceClass::Mobile)
    }

    pub fn is_tablet(&self) -> bool {
        matches!(self, DeviceClass::Tablet)
    }

    pub fn is_desktop(&self) -> bool {
        matches!(self, DeviceClass::Desktop)
    }

    /// Mobile or tablet; both get the stacked layout.
    pub fn is_compact(&self) -> bool {
        !self.is_desktop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_edges() {
        assert_eq!(DeviceClass::from_width(0.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(767.0), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(767.5), DeviceClass::Mobile);
        assert_eq!(DeviceClass::from_width(768.0), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1024.0), DeviceClass::Tablet);
        assert_eq!(DeviceClass::from_width(1024.5), DeviceClass::Desktop);
        assert_eq!(DeviceClass::from_width(1920.0), DeviceClass::Desktop);
    }

    #[test]
    fn test_flags_are_exclusive() {
        for width in [320.0, 800.0, 1440.0] {
            let class = DeviceClass::from_width(width);
            assert!(!(class.is_mobile() && class.is_tablet()));
        }
        assert!(DeviceClass::from_width(320.0).is_mobile());
        assert!(!DeviceClass::from_width(320.0).is_tablet());
        assert!(DeviceClass::from_width(800.0).is_tablet());
        assert!(!DeviceClass::from_width(800.0).is_mobile());
        let desktop = DeviceClass::from_width(1440.0);
        assert!(!desktop.is_mobile() && !desktop.is_tablet());
    }

    #[test]
    fn test_custom_breakpoints() {
        let breakpoints = Breakpoints {
            mobile_max_exclusive: 600.0,
            tablet_max_inclusive: 900.0,
        };
        assert_eq!(DeviceClass::classify(700.0, &breakpoints), DeviceClass::Tablet);
        assert_eq!(DeviceClass::classify(901.0, &breakpoints), DeviceClass::Desktop);
    }

    #[test]
    fn test_compact() {
        assert!(DeviceClass::Mobile.is_compact());
        assert!(DeviceClass::Tablet.is_compact());
        assert!(!DeviceClass::Desktop.is_compact());
    }
}
