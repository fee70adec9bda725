//! # Search Filter
//!
//! Turns the `?search=` term into a filter over the product list.
//!
//! ## How a Term Is Interpreted
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Search Term Interpretation                           │
//! │                                                                         │
//! │  raw term ──► trim + lowercase                                         │
//! │                    │                                                    │
//! │        ┌───────────┼─────────────────────┐                              │
//! │        ▼           ▼                     ▼                              │
//! │     ""          "42" (all digits)     "coca"                            │
//! │     All         Id(42)                Name("coca")                      │
//! │     every       id == 42 exactly      name contains "coca"              │
//! │     product     (no name fallback)    (case-insensitive)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::Product;

/// A parsed search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    /// No term (or only whitespace): list everything.
    All,

    /// All-digit term: exact id match.
    ///
    /// `None` when the digits do not fit an id, which matches nothing.
    Id(Option<u64>),

    /// Anything else: lowercase substring of the product name.
    Name(String),
}

impl SearchFilter {
    /// Parses an optional raw term.
    ///
    /// ## Example
    /// ```rust
    /// use menu_core::SearchFilter;
    ///
    /// assert_eq!(SearchFilter::parse(None), SearchFilter::All);
    /// assert_eq!(SearchFilter::parse(Some(" 7 ")), SearchFilter::Id(Some(7)));
    /// assert_eq!(SearchFilter::parse(Some("Coca")), SearchFilter::Name("coca".into()));
    /// ```
    pub fn parse(term: Option<&str>) -> Self {
        let term = match term {
            Some(t) => t.trim().to_lowercase(),
            None => return SearchFilter::All,
        };

        if term.is_empty() {
            SearchFilter::All
        } else if is_numeric_term(&term) {
            SearchFilter::Id(term.parse().ok())
        } else {
            SearchFilter::Name(term)
        }
    }

    /// Returns true if `product` passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            SearchFilter::All => true,
            SearchFilter::Id(id) => *id == Some(product.id),
            SearchFilter::Name(needle) => product.name.to_lowercase().contains(needle.as_str()),
        }
    }

    /// Keeps the matching products, preserving their order.
    pub fn apply(&self, products: Vec<Product>) -> Vec<Product> {
        match self {
            SearchFilter::All => products,
            _ => products.into_iter().filter(|p| self.matches(p)).collect(),
        }
    }
}

/// Returns true if the trimmed term is one or more ASCII digits.
///
/// Shared by the server filter and the client's id-first lookup.
pub fn is_numeric_term(term: &str) -> bool {
    let term = term.trim();
    !term.is_empty() && term.chars().all(|c| c.is_ascii_digit())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, name: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            price: 1.0,
            sku: format!("sku-{}", id),
            description: String::new(),
        }
    }

    fn menu() -> Vec<Product> {
        vec![
            product(1, "Coca-Cola Lata"),
            product(7, "Guaraná"),
            product(12, "Coca-Cola Zero 2L"),
            product(70, "Pizza 7 Queijos"),
        ]
    }

    #[test]
    fn test_parse_terms() {
        assert_eq!(SearchFilter::parse(None), SearchFilter::All);
        assert_eq!(SearchFilter::parse(Some("   ")), SearchFilter::All);
        assert_eq!(SearchFilter::parse(Some("007")), SearchFilter::Id(Some(7)));
        assert_eq!(SearchFilter::parse(Some("7a")), SearchFilter::Name("7a".to_string()));
        assert_eq!(
            SearchFilter::parse(Some("99999999999999999999999")),
            SearchFilter::Id(None)
        );
    }

    #[test]
    fn test_numeric_term_matches_id_only() {
        let found = SearchFilter::parse(Some("7")).apply(menu());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 7);

        // "Pizza 7 Queijos" contains "7" but numeric terms never match names
        let found = SearchFilter::parse(Some("8")).apply(menu());
        assert!(found.is_empty());
    }

    #[test]
    fn test_name_search_is_case_insensitive_substring() {
        let found = SearchFilter::parse(Some("COCA")).apply(menu());
        let ids: Vec<u64> = found.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 12]);

        let found = SearchFilter::parse(Some("guaraná")).apply(menu());
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_all_keeps_order() {
        let ids: Vec<u64> = SearchFilter::All.apply(menu()).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 7, 12, 70]);
    }

    #[test]
    fn test_overflowing_id_matches_nothing() {
        assert!(SearchFilter::Id(None).apply(menu()).is_empty());
    }

    #[test]
    fn test_is_numeric_term() {
        assert!(is_numeric_term("42"));
        assert!(is_numeric_term(" 42 "));
        assert!(!is_numeric_term(""));
        assert!(!is_numeric_term("4 2"));
        assert!(!is_numeric_term("-4"));
    }
}
