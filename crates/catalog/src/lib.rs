//! Catalog domain module (read-only store).
//!
//! This crate contains the storefront's static records — products, creators,
//! categories, reviews — and the immutable `Catalog` collection that indexes
//! them. No IO, no HTTP, no storage; everything is loaded once at startup.

pub mod category;
pub mod creator;
pub mod product;
pub mod review;
pub mod seed;
pub mod store;
pub mod text;

pub use category::Category;
pub use creator::{Creator, CreatorId, SocialLinks};
pub use product::{Product, ProductId};
pub use review::{Review, ReviewId};
pub use store::Catalog;
