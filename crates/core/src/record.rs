//! Record trait: a backend row the point of sale has loaded.

/// A loaded backend record with a stable identifier and a display name.
pub trait Record {
    /// Strongly-typed record identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the record identifier.
    fn record_id(&self) -> Self::Id;

    /// Human-readable name, as shown in pickers and on receipts.
    fn display_name(&self) -> &str;
}
