//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A stock record keeps its identity while its quantities change, so two
/// records with the same id describe the same stock position.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
