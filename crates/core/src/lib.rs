//! `posdelivery-core` — shared building blocks for the delivery receipt crates.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering).

pub mod error;
pub mod id;
pub mod record;
pub mod reference;
pub mod value_object;

pub use error::DomainError;
pub use id::{OrderId, PartnerId, RecordRefId};
pub use record::Record;
pub use reference::DisplayRef;
pub use value_object::ValueObject;
