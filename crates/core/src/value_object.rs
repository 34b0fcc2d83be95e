//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two statistic rows with the same key and count are
//! interchangeable.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`Tally { key: "NY", count: 2 }` equals any other such tally)
/// - **Entity**: has identity (a customer record is the same record across edits)
///
/// Value objects should be treated as immutable. To "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Tally {
///     key: String,
///     count: usize,
/// }
///
/// impl ValueObject for Tally {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
