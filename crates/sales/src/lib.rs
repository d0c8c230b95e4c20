//! Point-of-sale orders as handed to the receipt printer.
//!
//! This crate models the order side of a print request (lines, notes, the
//! order timestamp) and how an order's customer is looked up. Deterministic,
//! no IO.

pub mod order;
pub mod resolver;

pub use order::{OrderLine, PosOrder};
pub use resolver::{EmbeddedPartner, Fallback, PartnerDirectory, PartnerResolver};
