//! The page state snapshot.

use crate::model::{HexColor, Section};
use crate::viewport::DeviceClass;

/// Everything the page renders from.
///
/// Owned by the page controller; children only ever see it through the
/// derived [`crate::layout::PageLayout`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub section: Section,
    pub color: HexColor,
    pub device: DeviceClass,
    pub model_visible: bool,
}
