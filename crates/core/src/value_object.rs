//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Filter settings and their parts (price ceiling, rating
/// threshold, sort order, category selection) are value objects: two settings
/// with the same fields derive the same list.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct PriceCeiling(u64);
///
/// impl ValueObject for PriceCeiling {}
///
/// assert_eq!(PriceCeiling(1000), PriceCeiling(1000));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
