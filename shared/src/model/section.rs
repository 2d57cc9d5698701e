//! Content sections of the landing page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LandingError;

/// Named content block shown in the text panel.
///
/// The string id is the variant name (`"Releases"`, `"NewArrivals"`, ...),
/// which is also what serde reads and writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Releases,
    NewArrivals,
    Classics,
}

impl Section {
    /// All sections in navigation order.
    pub const ALL: [Section; 3] = [Section::Releases, Section::NewArrivals, Section::Classics];

    pub fn id(&self) -> &'static str {
        match self {
            Section::Releases => "Releases",
            Section::NewArrivals => "NewArrivals",
            Section::Classics => "Classics",
        }
    }

    /// Label used in the navigation bar.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Releases => "Releases",
            Section::NewArrivals => "New Arrivals",
            Section::Classics => "Classics",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = LandingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| LandingError::UnknownSection(s.to_string()))
    }
}
