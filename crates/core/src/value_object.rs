//! Value object trait: equality by value, not identity.
//!
//! Everything the enricher reads or produces (addresses, reference pairs,
//! receipt blocks) is a value: two values with the same fields are the same
//! value, regardless of where they came from.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one. Receipts rely on this: an enriched receipt is a fresh value
/// and never aliases the record it was derived from.
///
/// The trait requires:
/// - **Clone**: values are copied, not shared
/// - **PartialEq**: comparison by attribute values
/// - **Debug**: helpful in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct DisplayRef { id: RecordRefId, label: String }
///
/// impl ValueObject for DisplayRef {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
