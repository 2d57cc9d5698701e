//! # Class String Helpers
//!
//! The layout code builds utility-class strings out of fixed tokens and
//! conditional ones. Conditionals that do not apply come through as empty
//! strings, so everything goes through [`join_classes`] to keep the output
//! free of doubled or trailing spaces.
//!
//! ```rust
//! use shared::utils::{join_classes, pick};
//!
//! let tablet = true;
//! let classes = join_classes(&["w-full", pick(tablet, "mx-auto", ""), "z-10"]);
//! assert_eq!(classes, "w-full mx-auto z-10");
//! ```

/// Join class fragments with single spaces, skipping empty fragments.
///
/// Fragments may themselves contain several classes or stray whitespace;
/// they are split and re-joined so the result is normalized.
pub fn join_classes(parts: &[&str]) -> String {
    parts
        .iter()
        .flat_map(|part| part.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `if cond { yes } else { no }` for class fragments.
pub fn pick<'a>(cond: bool, yes: &'a str, no: &'a str) -> &'a str {
    if cond {
        yes
    } else {
        no
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_classes_skips_empty() {
        assert_eq!(join_classes(&["a", "", "b", ""]), "a b");
        assert_eq!(join_classes(&[]), "");
        assert_eq!(join_classes(&["", ""]), "");
    }

    #[test]
    fn test_join_classes_normalizes_whitespace() {
        assert_eq!(join_classes(&["  a   b ", "c\n d"]), "a b c d");
    }

    #[test]
    fn test_pick() {
        assert_eq!(pick(true, "x", "y"), "x");
        assert_eq!(pick(false, "x", "y"), "y");
    }
}
