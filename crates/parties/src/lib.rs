//! Partners (customers) as the point of sale sees them.
//!
//! Read-only model of the partner record loaded into the front end, plus the
//! address and contact helpers receipts and delivery slips need.

pub mod document;
pub mod partner;

pub use document::DocumentType;
pub use partner::Partner;
