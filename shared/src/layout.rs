//! # Presentation Composer
//!
//! Pure derivation of the page's layout from [`PageState`]: utility classes
//! per device class, the active section's copy, the props handed to the 3D
//! viewer and the motion settings for the animated panels.
//!
//! ```rust
//! use shared::layout::compose;
//! use shared::model::PageState;
//! use shared::viewport::DeviceClass;
//!
//! let state = PageState { device: DeviceClass::Mobile, ..PageState::default() };
//! let layout = compose(&state);
//! assert!(layout.row_class.contains("flex-col"));
//! assert!(layout.viewer_class.contains("h-[350px]"));
//! assert_eq!(layout.content.title, "Nike Dunk Low");
//! ```

use crate::content::SectionContent;
use crate::model::{HexColor, PageState, Section};
use crate::utils::{join_classes, pick};
use crate::viewport::DeviceClass;

pub const ROOT_CLASS: &str = "max-h-screen w-full overflow-x-hidden";
pub const EYEBROW_CLASS: &str = "text-sm uppercase tracking-wider font-bold text-slate-600";
pub const SUBTITLE_CLASS: &str = "text-xl md:text-2xl font-light tracking-wide";
pub const CTA_ROW_CLASS: &str = "flex flex-col sm:flex-row gap-4 justify-center md:justify-start";
pub const PRIMARY_CTA_CLASS: &str = "bg-slate-700 text-white px-8 py-3 transition-all duration-300 \
    ease-in-out transform hover:scale-105 hover:border-2 border-white/30 rounded-full text-sm \
    font-bold tracking-wide";
pub const SECONDARY_CTA_CLASS: &str = "bg-transparent text-slate-700 px-8 py-3 transition-all \
    duration-300 ease-in-out transform hover:scale-105 border-2 border-slate-700 rounded-full \
    text-sm font-bold tracking-wide";

/// Cubic-bezier easing curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Easing(pub f64, pub f64, pub f64, pub f64);

impl Easing {
    pub fn css(&self) -> String {
        format!("cubic-bezier({}, {}, {}, {})", self.0, self.1, self.2, self.3)
    }
}

/// Enter/exit animation of an element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub duration_s: f64,
    pub easing: Easing,
    /// Vertical offset, in pixels, the element enters from.
    pub enter_offset_y: f64,
    /// Vertical offset, in pixels, the element leaves towards.
    pub exit_offset_y: f64,
}

impl Motion {
    /// Keyed section panel: slides up into place, leaves upwards.
    pub const SECTION_PANEL: Motion = Motion {
        duration_s: 0.8,
        easing: Easing(0.32, 0.72, 0.0, 1.0),
        enter_offset_y: 20.0,
        exit_offset_y: -20.0,
    };

    /// Viewer container: fades in once on mount.
    pub const VIEWER_CONTAINER: Motion = Motion {
        duration_s: 1.2,
        easing: Easing(0.22, 1.0, 0.36, 1.0),
        enter_offset_y: 0.0,
        exit_offset_y: 0.0,
    };

    /// CSS `transition` value for opacity and transform.
    pub fn transition_css(&self) -> String {
        let easing = self.easing.css();
        format!(
            "opacity {d}s {e}, transform {d}s {e}",
            d = self.duration_s,
            e = easing
        )
    }

    /// CSS `animation` shorthand for a named keyframe.
    pub fn animation_css(&self, keyframes: &str) -> String {
        format!("{} {}s {} both", keyframes, self.duration_s, self.easing.css())
    }

    /// Inline style that plays `keyframes` from the enter offset.
    ///
    /// The keyframes read the offset from `--enter-offset`.
    pub fn enter_style(&self, keyframes: &str) -> String {
        format!(
            "--enter-offset: {}px; animation: {};",
            self.enter_offset_y,
            self.animation_css(keyframes)
        )
    }

    /// Inline style for the element at rest (`shown`) or hidden.
    pub fn style(&self, shown: bool) -> String {
        let (opacity, offset) = if shown {
            (1.0, 0.0)
        } else {
            (0.0, self.exit_offset_y)
        };
        format!(
            "opacity: {}; transform: translateY({}px); transition: {};",
            opacity,
            offset,
            self.transition_css()
        )
    }
}

/// Props for the 3D viewer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerProps {
    pub color: HexColor,
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub visible: bool,
}

/// Everything the page template needs.
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    pub root_class: &'static str,
    pub row_class: String,
    pub text_column_class: String,
    pub heading_class: String,
    pub body_class: String,
    pub viewer_class: String,
    pub section: Section,
    pub content: &'static SectionContent,
    pub viewer: ViewerProps,
    pub panel_motion: Motion,
    pub viewer_motion: Motion,
}

impl PageLayout {
    /// Section panel style: the enter animation, or the exit pose while the
    /// panel is on its way out.
    pub fn panel_style(&self, leaving: bool) -> String {
        if leaving {
            self.panel_motion.style(false)
        } else {
            self.panel_motion.enter_style("section-enter")
        }
    }

    pub fn viewer_container_style(&self) -> String {
        self.viewer_motion.enter_style("fade-in")
    }
}

pub fn compose(state: &PageState) -> PageLayout {
    let device = state.device;
    PageLayout {
        root_class: ROOT_CLASS,
        row_class: row_class(device),
        text_column_class: text_column_class(device),
        heading_class: heading_class(device),
        body_class: body_class(device),
        viewer_class: viewer_class(device),
        section: state.section,
        content: state.section.content(),
        viewer: viewer_props(state),
        panel_motion: Motion::SECTION_PANEL,
        viewer_motion: Motion::VIEWER_CONTAINER,
    }
}

pub fn viewer_props(state: &PageState) -> ViewerProps {
    ViewerProps {
        color: state.color.clone(),
        is_mobile: state.device.is_mobile(),
        is_tablet: state.device.is_tablet(),
        visible: state.model_visible,
    }
}

/// Main row: stacks on compact devices, side by side on desktop.
pub fn row_class(device: DeviceClass) -> String {
    let compact = device.is_compact();
    join_classes(&[
        "flex",
        pick(compact, "flex-col", "flex-row"),
        "justify-center items-center px-4 md:px-8",
        pick(compact, "lg:px-25", "lg:px-16"),
        pick(compact, "lg:pl-55", "lg:pl-36"),
        "text-slate-700",
        match device {
            DeviceClass::Mobile => "mt-16",
            DeviceClass::Tablet => "mt-8",
            DeviceClass::Desktop => "mt-0",
        },
        pick(device.is_desktop(), "gap-0", ""),
    ])
}

pub fn text_column_class(device: DeviceClass) -> String {
    join_classes(&[
        "text-center",
        pick(device.is_desktop(), "text-left", ""),
        "w-full z-10 px-4 md:px-8",
        match device {
            DeviceClass::Tablet => "max-w-2xl mx-auto",
            DeviceClass::Desktop => "pr-0 mr-0 max-w-xl",
            DeviceClass::Mobile => "",
        },
    ])
}

pub fn heading_class(device: DeviceClass) -> String {
    join_classes(&[
        "text-4xl",
        pick(device.is_tablet(), "text-5xl", "md:text-5xl lg:text-7xl"),
        "font-[var(--font-outfit)] font-bold",
    ])
}

pub fn body_class(device: DeviceClass) -> String {
    join_classes(&[
        "font-[var(--font-inter)] text-sm",
        pick(device.is_tablet(), "text-base", "md:text-base"),
        "mt-4 sm:w-full p-4 sm:p-0 max-w-lg mx-auto md:mx-0",
    ])
}

pub fn viewer_class(device: DeviceClass) -> String {
    let (height, margin) = match device {
        DeviceClass::Mobile => ("h-[350px]", "mt-4"),
        DeviceClass::Tablet => ("h-[450px]", "mt-8"),
        DeviceClass::Desktop => ("h-[550px]", "mt-0"),
    };
    join_classes(&[
        "w-full",
        height,
        margin,
        pick(device.is_desktop(), "ml-[-80px]", ""),
        "flex items-center justify-center",
    ])
}
