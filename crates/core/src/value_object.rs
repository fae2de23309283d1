//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** — two value
/// objects with the same attribute values are equal. `Money` is the canonical
/// example in this workspace; `Product` and friends are records with identity
/// and are modeled as entities instead.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
