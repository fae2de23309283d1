use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use digitalden_core::{AggregateId, Entity};

use crate::product::ProductId;

/// Review identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub AggregateId);

impl ReviewId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A customer review. Many reviews per product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub user_name: String,
    pub user_avatar: String,
    /// Whole stars, 1–5.
    pub rating: u8,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    /// "Found this helpful" vote count.
    pub helpful: u32,
    /// Reviewer verified as a purchaser.
    pub verified: bool,
}

impl Entity for Review {
    type Id = ReviewId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
