//! Aggregate root trait for mutable domain models.

/// Aggregate root marker + minimal interface.
///
/// This is intentionally small: the cart is the only mutable aggregate in the
/// storefront core, and its operations are total (no command/event split, no
/// rejection paths), so all the trait asks for is identity and a version.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Implementations bump this once per state-changing operation; calls
    /// that leave state untouched (no-op removes, etc.) must not bump it.
    fn version(&self) -> u64;
}
