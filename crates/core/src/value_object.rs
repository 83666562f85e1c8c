//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances holding the same values
/// are interchangeable. They are immutable; to "change" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Bin {
///     aisle: u32,
///     shelf: u32,
/// }
///
/// impl ValueObject for Bin {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
