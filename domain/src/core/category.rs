//! Category value object
//!
//! The closed set of factions an answer can score toward. Every component
//! that enumerates categories (tally initialization, report ordering, quote
//! lookup, question bank parsing) goes through [`Category::ALL`] so they
//! can never drift apart.

use serde::Deserialize;

/// A faction an answer option scores toward
///
/// Variant order is the enumeration order used for display, the persisted
/// result file, and dominant-category tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum Category {
    #[serde(rename = "Ork")]
    Ork,
    #[serde(rename = "Space Marine")]
    SpaceMarine,
    #[serde(rename = "Eldar")]
    Eldar,
    #[serde(rename = "Chaos Marine")]
    ChaosMarine,
    #[serde(rename = "Imperial Guard")]
    ImperialGuard,
}

impl Category {
    /// All categories in enumeration order
    pub const ALL: [Category; 5] = [
        Category::Ork,
        Category::SpaceMarine,
        Category::Eldar,
        Category::ChaosMarine,
        Category::ImperialGuard,
    ];

    /// Display name as it appears in question files and reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Ork => "Ork",
            Category::SpaceMarine => "Space Marine",
            Category::Eldar => "Eldar",
            Category::ChaosMarine => "Chaos Marine",
            Category::ImperialGuard => "Imperial Guard",
        }
    }

    /// Flavor quote shown when this category is dominant
    pub fn quote(&self) -> &'static str {
        match self {
            Category::SpaceMarine => "Burn the Heretic. Kill the Mutant. Purge the Unclean!",
            Category::ChaosMarine => "Let the galaxy burn.",
            Category::Eldar => "We see the strands of fate. You merely stumble through them.",
            Category::Ork => "WAAAGH!",
            Category::ImperialGuard => "Only in death does duty end.",
        }
    }

    /// Position within [`Category::ALL`]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec!["Ork", "Space Marine", "Eldar", "Chaos Marine", "Imperial Guard"]
        );
    }

    #[test]
    fn test_index_matches_all() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_every_category_has_quote() {
        for category in Category::ALL {
            assert!(!category.quote().is_empty());
        }
        assert_eq!(Category::Ork.quote(), "WAAAGH!");
    }

    #[test]
    fn test_deserialize_display_name() {
        let category: Category = serde_json::from_str("\"Space Marine\"").unwrap();
        assert_eq!(category, Category::SpaceMarine);
    }

    #[test]
    fn test_deserialize_unknown_fails() {
        let result: Result<Category, _> = serde_json::from_str("\"Necron\"");
        assert!(result.is_err());
    }
}
