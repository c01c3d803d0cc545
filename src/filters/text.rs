//! Free-text search filter.

use super::Filter;
use crate::catalog::Product;

/// Case-insensitive substring search over name, description, tags, and
/// category name. A product matches if any field contains the term.
pub struct TextFilter {
    term: String,
}

impl TextFilter {
    /// Creates a search filter. The term is trimmed and lowercased.
    pub fn new(term: &str) -> Self {
        Self { term: term.trim().to_lowercase() }
    }

    /// Returns true if the term is empty after trimming.
    pub fn is_blank(&self) -> bool {
        self.term.is_empty()
    }
}

impl Filter for TextFilter {
    fn matches(&self, product: &Product) -> bool {
        if self.is_blank() {
            return false;
        }

        let term = self.term.as_str();
        product.name.to_lowercase().contains(term)
            || product.description.to_lowercase().contains(term)
            || product.tags.iter().any(|tag| tag.to_lowercase().contains(term))
            || product.category.name.to_lowercase().contains(term)
    }

    fn description(&self) -> String {
        format!("Search: \"{}\"", self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::demo_products;

    fn matching_ids(term: &str) -> Vec<String> {
        let filter = TextFilter::new(term);
        demo_products().into_iter().filter(|p| filter.matches(p)).map(|p| p.id).collect()
    }

    #[test]
    fn test_name_match() {
        assert_eq!(matching_ids("macbook"), vec!["prod_2"]);
        assert_eq!(matching_ids("MacBook"), vec!["prod_2"]);
    }

    #[test]
    fn test_description_match() {
        assert_eq!(matching_ids("titanium"), vec!["prod_3"]);
    }

    #[test]
    fn test_tag_substring_match() {
        assert_eq!(matching_ids("ergonom"), vec!["prod_4"]);
    }

    #[test]
    fn test_category_name_match() {
        assert_eq!(matching_ids("smartphones"), vec!["prod_3"]);
    }

    #[test]
    fn test_matches_across_fields() {
        // "premium" hits prod_1 (name/tag) and prod_4 (name/description)
        assert_eq!(matching_ids("premium"), vec!["prod_1", "prod_4"]);
    }

    #[test]
    fn test_trimmed_term() {
        assert_eq!(matching_ids("  chair  "), vec!["prod_4"]);
    }

    #[test]
    fn test_blank_matches_nothing() {
        assert!(matching_ids("").is_empty());
        assert!(matching_ids("   \t").is_empty());
        assert!(TextFilter::new(" ").is_blank());
    }

    #[test]
    fn test_description_text() {
        assert_eq!(TextFilter::new(" MacBook ").description(), "Search: \"macbook\"");
    }
}
