use serde::{Deserialize, Serialize};

use digitalden_catalog::Product;
use digitalden_core::Money;

/// Conjunctive filter configuration.
///
/// Unset options are pass-through; set options are ANDed, so the order of
/// application never changes the result set. Free-text sanitization is the
/// presentation layer's job — by the time a query string reaches here it is
/// just a substring to match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Category slug; `None` or the sentinel `"all"` keep everything.
    pub category: Option<String>,
    /// Inclusive `[min, max]` price bounds.
    pub price_range: Option<(Money, Money)>,
    /// Keep products rated at or above this value.
    pub min_rating: Option<f32>,
    /// Case-insensitive substring match over title, description, and tags.
    pub search_query: Option<String>,
}

impl FilterCriteria {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if category != "all" && product.category != *category {
                return false;
            }
        }

        if let Some((min, max)) = self.price_range {
            if product.price < min || product.price > max {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            if product.rating < min_rating {
                return false;
            }
        }

        if let Some(query) = &self.search_query {
            // An empty query box filters nothing.
            if !query.is_empty() && !Self::text_matches(product, query) {
                return false;
            }
        }

        true
    }

    fn text_matches(product: &Product, query: &str) -> bool {
        let query = query.to_lowercase();
        product.title.to_lowercase().contains(&query)
            || product.description.to_lowercase().contains(&query)
            || product
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&query))
    }
}

/// Sort order for product listings.
///
/// The storefront's "unrecognized key leaves the order unchanged" rule lives
/// at the parse boundary: `SortKey::parse` returns `None` for unknown keys,
/// and `engine::sort` with `None` preserves input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Descending sales count.
    Popular,
    /// Descending creation timestamp.
    Newest,
    /// Price ascending.
    PriceLow,
    /// Price descending.
    PriceHigh,
    /// Descending rating.
    Rating,
}

impl SortKey {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "popular" => Some(Self::Popular),
            "newest" => Some(Self::Newest),
            "price-low" => Some(Self::PriceLow),
            "price-high" => Some(Self::PriceHigh),
            "rating" => Some(Self::Rating),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Newest => "newest",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_known_keys() {
        for key in [
            SortKey::Popular,
            SortKey::Newest,
            SortKey::PriceLow,
            SortKey::PriceHigh,
            SortKey::Rating,
        ] {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        assert_eq!(SortKey::parse("relevance"), None);
        assert_eq!(SortKey::parse(""), None);
    }

    #[test]
    fn default_criteria_match_everything() {
        let catalog = digitalden_catalog::seed::catalog();
        let criteria = FilterCriteria::default();
        assert!(catalog.products().iter().all(|p| criteria.matches(p)));
    }

    #[test]
    fn all_category_sentinel_is_pass_through() {
        let catalog = digitalden_catalog::seed::catalog();
        let criteria = FilterCriteria {
            category: Some("all".to_string()),
            ..Default::default()
        };
        assert!(catalog.products().iter().all(|p| criteria.matches(p)));
    }

    #[test]
    fn empty_search_query_is_pass_through() {
        let catalog = digitalden_catalog::seed::catalog();
        let criteria = FilterCriteria {
            search_query: Some(String::new()),
            ..Default::default()
        };
        assert!(catalog.products().iter().all(|p| criteria.matches(p)));
    }
}
