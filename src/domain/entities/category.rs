//! Supported book categories.

use std::fmt;
use std::str::FromStr;

/// Raised when a category tag is outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// Topic a book is filed under.
///
/// The set is closed: catalog records with any other topic are rejected at
/// load time, and filter requests for other tags fail with [`UnknownCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Business,
    Education,
    Fiction,
    History,
    Science,
    Technology,
}

impl Category {
    /// Every supported category, in declaration order.
    pub const ALL: [Category; 6] = [
        Category::Business,
        Category::Education,
        Category::Fiction,
        Category::History,
        Category::Science,
        Category::Technology,
    ];

    /// Lowercase tag used on the wire and in catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "business",
            Category::Education => "education",
            Category::Fiction => "fiction",
            Category::History => "history",
            Category::Science => "science",
            Category::Technology => "technology",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parses a tag case-insensitively, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tags() {
        assert_eq!("education".parse(), Ok(Category::Education));
        assert_eq!("  Fiction ".parse(), Ok(Category::Fiction));
        assert_eq!("TECHNOLOGY".parse(), Ok(Category::Technology));
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = "cooking".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("cooking".to_string()));
        assert_eq!(err.to_string(), "Unknown category: cooking");
    }

    #[test]
    fn test_round_trip_all() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }
}
