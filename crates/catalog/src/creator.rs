use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use digitalden_core::{AggregateId, Entity};

/// Creator identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatorId(pub AggregateId);

impl CreatorId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for CreatorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Optional profile links shown on a creator page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub website: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
}

/// A seller profile.
///
/// Owns products only by reference: `Product.creator_id` points here, and the
/// catalog store owns the product records themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creator {
    pub id: CreatorId,
    /// Unique handle used for profile routing.
    pub handle: String,
    pub name: String,
    pub bio: String,
    pub avatar: String,
    pub verified: bool,
    pub rating: f32,
    /// Denormalized profile stats, sourced independently of the live
    /// product list (display-only).
    pub product_count: u32,
    pub sales_count: u32,
    pub review_count: u32,
    pub joined_date: NaiveDate,
    pub location: Option<String>,
    pub specialties: Vec<String>,
    pub social: SocialLinks,
}

impl Entity for Creator {
    type Id = CreatorId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
