use serde::{Deserialize, Serialize};

/// A browsing category.
///
/// Keyed by `slug` (the storefront's category id and slug are the same
/// string). `count` is a denormalized display figure sourced independently of
/// the product list — it may drift from the true number of matching products
/// and is never recomputed or enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
    pub description: String,
    /// Icon name rendered by the presentation layer.
    pub icon: String,
    /// Accent gradient class rendered by the presentation layer.
    pub accent: String,
    pub count: u32,
}
