//! Query engine over the catalog's product collection.
//!
//! Pure, side-effect-free functions: filtering, sorting, pagination, and the
//! derived home-page subsets (related / trending / featured). Every operation
//! is total — empty or degenerate input yields empty output, never an error.

pub mod criteria;
pub mod engine;

pub use criteria::{FilterCriteria, SortKey};
pub use engine::{
    featured_products, filter, paginate, related_products, sort, trending_products,
};
