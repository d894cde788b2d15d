//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity: two instances holding the same attribute
/// values are the same value. They are immutable once constructed; to change
/// one, build a new one (e.g. `HexColor::parse("#ffffff")`).
///
/// Constructors are expected to validate, so holding a value object means
/// holding a value that already satisfies its constraints.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
