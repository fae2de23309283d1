//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Catalog records (products, creators, reviews) are entities: equal ids mean
/// the same record, regardless of field values.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
