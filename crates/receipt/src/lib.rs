//! Receipt enrichment for delivery orders.
//!
//! Wraps the point of sale's "export for printing" record and adds what a
//! delivery receipt needs: the customer block, the order's general note, the
//! order time in the shop's civil time, and per-line internal notes. Pure and
//! synchronous; the result is a new value handed to the renderer.

pub mod cli;
pub mod config;
pub mod enricher;
pub mod error;
pub mod export;
pub mod locale;
pub mod request;
pub mod timestamp;

pub use config::ReceiptConfig;
pub use enricher::{Enrichment, ReceiptEnricher};
pub use error::{ReceiptError, ReceiptResult};
pub use export::{BaseExport, EnrichedLine, EnrichedReceipt, PartnerBlock};
pub use locale::ReceiptLocale;
pub use request::PrintRequest;
