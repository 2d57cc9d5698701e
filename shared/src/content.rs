//! Copy for each [`Section`].

use crate::model::Section;

/// Text block rendered in the page's text panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionContent {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static str,
    pub primary_cta: &'static str,
    pub secondary_cta: &'static str,
}

const RELEASES: SectionContent = SectionContent {
    eyebrow: "Just In",
    title: "Nike Dunk Low",
    subtitle: "Legendary Style, Reborn",
    body: "Born in the hardwood but taken to the streets, the Nike Dunk Low returns with crisp \
           overlays and original team colors. This basketball icon channels '80s vibes with \
           premium leather in the upper that breaks in beautifully and ages to perfection.",
    primary_cta: "Shop Now",
    secondary_cta: "Learn More",
};

const NEW_ARRIVALS: SectionContent = SectionContent {
    eyebrow: "New Arrivals",
    title: "Dunk Low Retro",
    subtitle: "Fresh Colorways, Same Soul",
    body: "Two-tone leather, a padded low-cut collar and the classic pivot-circle outsole. \
           Pick a colorway and watch it come to life: every pair in this drop is built for \
           the court and tuned for everyday wear.",
    primary_cta: "Shop the Drop",
    secondary_cta: "See All Colors",
};

const CLASSICS: SectionContent = SectionContent {
    eyebrow: "Classics",
    title: "Since 1985",
    subtitle: "Be True To Your School",
    body: "The Dunk started life as a college basketball shoe dressed in team colors. Decades \
           later the silhouette is unchanged where it matters, with the same stitching lines \
           and the same cupsole that skaters adopted and never gave back.",
    primary_cta: "Shop Classics",
    secondary_cta: "Our Story",
};

impl Section {
    pub fn content(&self) -> &'static SectionContent {
        match self {
            Section::Releases => &RELEASES,
            Section::NewArrivals => &NEW_ARRIVALS,
            Section::Classics => &CLASSICS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_releases_copy() {
        let content = Section::Releases.content();
        assert_eq!(content.eyebrow, "Just In");
        assert_eq!(content.title, "Nike Dunk Low");
        assert_eq!(content.subtitle, "Legendary Style, Reborn");
        assert!(content.body.starts_with("Born in the hardwood"));
        assert!(content.body.ends_with("ages to perfection."));
        assert_eq!(content.primary_cta, "Shop Now");
        assert_eq!(content.secondary_cta, "Learn More");
    }

    #[test]
    fn test_every_section_has_distinct_title() {
        let mut titles: Vec<_> = Section::ALL.iter().map(|s| s.content().title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), Section::ALL.len());
    }

    #[test]
    fn test_body_has_no_line_continuation_gaps() {
        for section in Section::ALL {
            assert!(!section.content().body.contains("  "), "{section}");
        }
    }
}
