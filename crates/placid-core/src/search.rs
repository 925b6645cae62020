//! Live category filter.
//!
//! Cards are matched with a plain case-insensitive substring test against
//! their category label and visible text, recomputed on every keystroke.

use serde::{Deserialize, Serialize};

/// Class toggled on cards that do not match the current query.
pub const HIDDEN_CLASS: &str = "is-hidden";

/// Data attribute carrying a card's category label.
pub const CATEGORY_ATTR: &str = "data-category";

/// A searchable category card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCard {
    /// Category label from the card's data attribute.
    #[serde(default)]
    pub category: String,

    /// Visible text content of the card.
    pub text: String,
}

impl CategoryCard {
    pub fn new(category: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            text: text.into(),
        }
    }

    /// Text the query is matched against.
    ///
    /// The label is used as written; only the visible text is lowercased.
    pub fn haystack(&self) -> String {
        format!("{} {}", self.category, self.text.to_lowercase())
    }

    /// Whether the card stays visible for an already-normalized query.
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty() || self.haystack().contains(query)
    }
}

/// Trim and lowercase a raw query.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Result of filtering a set of cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOutcome {
    /// Visibility per card, in input order.
    pub visible: Vec<bool>,

    /// Number of visible cards.
    pub visible_count: usize,

    /// Text for the feedback region.
    pub feedback: String,
}

/// Filter `cards` against the raw input value.
pub fn apply_filter(raw_query: &str, cards: &[CategoryCard]) -> FilterOutcome {
    let query = normalize_query(raw_query);
    let visible: Vec<bool> = cards.iter().map(|card| card.matches(&query)).collect();
    let visible_count = visible.iter().filter(|v| **v).count();
    let feedback = feedback_message(raw_query, &query, visible_count);

    FilterOutcome {
        visible,
        visible_count,
        feedback,
    }
}

/// Feedback text for a query. The raw query is echoed verbatim.
pub fn feedback_message(raw_query: &str, normalized: &str, count: usize) -> String {
    if normalized.is_empty() {
        String::new()
    } else if count > 0 {
        let noun = if count == 1 { "category" } else { "categories" };
        format!("Showing {count} {noun} for \"{raw_query}\"")
    } else {
        format!("No categories found for \"{raw_query}\". Try a different search.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<CategoryCard> {
        vec![
            CategoryCard::new("fruit", "Apple Pie"),
            CategoryCard::new("tool", "Hammer Set"),
            CategoryCard::new("fruit", "Pie Crust Kit"),
        ]
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query("  Pie  "), "pie");
        assert_eq!(normalize_query("\t\n"), "");
    }

    #[test]
    fn test_haystack_keeps_label_case() {
        let card = CategoryCard::new("Fruit", "Apple PIE");
        assert_eq!(card.haystack(), "Fruit apple pie");
        assert!(!card.matches("fruit"));
        assert!(card.matches("apple"));
    }

    #[test]
    fn test_match_on_category_label() {
        let outcome = apply_filter("tool", &cards());
        assert_eq!(outcome.visible, vec![false, true, false]);
        assert_eq!(outcome.feedback, "Showing 1 category for \"tool\"");
    }

    #[test]
    fn test_plural_feedback_uses_raw_query() {
        let outcome = apply_filter(" PIE ", &cards());
        assert_eq!(outcome.visible_count, 2);
        assert_eq!(outcome.feedback, "Showing 2 categories for \" PIE \"");
    }

    #[test]
    fn test_whitespace_query_shows_everything() {
        let outcome = apply_filter("   ", &cards());
        assert_eq!(outcome.visible_count, 3);
        assert!(outcome.feedback.is_empty());
    }

    #[test]
    fn test_match_spans_label_and_text() {
        let outcome = apply_filter("tool hammer", &cards());
        assert_eq!(outcome.visible, vec![false, true, false]);
    }

    #[test]
    fn test_no_cards() {
        let outcome = apply_filter("pie", &[]);
        assert_eq!(outcome.visible_count, 0);
        assert_eq!(
            outcome.feedback,
            "No categories found for \"pie\". Try a different search."
        );
    }

    #[test]
    fn test_card_deserialize_without_category() {
        let card: CategoryCard = serde_json::from_str(r#"{"text": "Garden"}"#).unwrap();
        assert_eq!(card.category, "");
        assert!(card.matches("garden"));
    }
}
