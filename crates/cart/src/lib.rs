//! Cart domain module.
//!
//! The per-session shopping cart: the only mutable aggregate in the
//! storefront core. Pure deterministic domain logic — no IO, no HTTP, no
//! storage, and no durability beyond the owning session.

pub mod cart;

pub use cart::{Cart, CartId, CartLine, CartSnapshot};
