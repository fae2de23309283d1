use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use digitalden_core::{AggregateId, Entity, Money};

use crate::creator::CreatorId;

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub AggregateId);

impl ProductId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A digital product listing.
///
/// Immutable once loaded from the catalog. `rating` carries one-decimal
/// display granularity (0.0–5.0), so the record is `PartialEq` but not `Eq`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Unique, URL-safe handle used for routing.
    pub slug: String,
    pub title: String,
    pub description: String,
    pub short_description: String,
    /// Category slug this product belongs to.
    pub category: String,
    pub tags: Vec<String>,
    /// Current (possibly discounted) price.
    pub price: Money,
    /// Pre-discount price; equals `price` when the product is not on sale.
    pub original_price: Money,
    pub rating: f32,
    pub review_count: u32,
    pub sales_count: u32,
    pub creator_id: CreatorId,
    /// Ordered gallery image URLs; the first is the card image.
    pub images: Vec<String>,
    pub preview_url: String,
    pub featured: bool,
    pub trending: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Percentage off the original price, rounded to the nearest integer.
    ///
    /// Zero when the product is not discounted (`original_price <= price`).
    pub fn discount_percent(&self) -> u8 {
        if self.original_price <= self.price || self.original_price.is_zero() {
            return 0;
        }
        let saved = self.original_price.saturating_sub(self.price).cents() as f64;
        (saved / self.original_price.cents() as f64 * 100.0).round() as u8
    }

    pub fn is_discounted(&self) -> bool {
        self.original_price > self.price
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn sample() -> Product {
        seed::catalog().products()[0].clone()
    }

    #[test]
    fn discount_percent_rounds_to_nearest_integer() {
        let mut product = sample();
        product.price = Money::from_cents(2999);
        product.original_price = Money::from_cents(4999);
        // (4999 - 2999) / 4999 = 40.008...%
        assert_eq!(product.discount_percent(), 40);
        assert!(product.is_discounted());
    }

    #[test]
    fn discount_percent_is_zero_without_markdown() {
        let mut product = sample();
        product.original_price = product.price;
        assert_eq!(product.discount_percent(), 0);
        assert!(!product.is_discounted());
    }

    #[test]
    fn tag_lookup_ignores_case() {
        let mut product = sample();
        product.tags = vec!["Figma".to_string(), "design-system".to_string()];
        assert!(product.has_tag("figma"));
        assert!(!product.has_tag("sketch"));
    }
}
