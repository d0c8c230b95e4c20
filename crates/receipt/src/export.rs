//! The printable record before and after enrichment.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use posdelivery_core::ValueObject;
use posdelivery_core::reference::falsy;
use posdelivery_parties::Partner;

pub const PARTNER_KEY: &str = "partner";
pub const GENERAL_NOTE_KEY: &str = "generalNote";
pub const CREATION_DATE_KEY: &str = "creationDate";
pub const INTERNAL_NOTE_KEY: &str = "internalNote";

/// Record produced by the point of sale's own export step.
///
/// Opaque apart from `orderlines`; every other key is carried through to the
/// enriched receipt untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseExport {
    #[serde(default, deserialize_with = "falsy::list")]
    pub orderlines: Vec<Map<String, Value>>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl BaseExport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    pub fn with_line(mut self, line: Map<String, Value>) -> Self {
        self.orderlines.push(line);
        self
    }
}

/// Customer block printed on the receipt. Missing values are `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerBlock {
    pub name: String,
    pub street: String,
    pub street2: String,
    pub city: String,
    /// State label.
    pub state_id: String,
    pub zip: String,
    /// Country label.
    pub country_id: String,
    pub phone: String,
    pub mobile: String,
    pub vat: String,
    pub document_type: String,
    pub document_type_label: String,
    pub document_number: String,
    /// One-line address for the courier.
    pub address: String,
    /// Phone, else mobile.
    pub contact_phone: String,
}

impl ValueObject for PartnerBlock {}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

impl From<&Partner> for PartnerBlock {
    fn from(partner: &Partner) -> Self {
        Self {
            name: text(partner.name.as_deref()),
            street: text(partner.street.as_deref()),
            street2: text(partner.street2.as_deref()),
            city: text(partner.city.as_deref()),
            state_id: text(partner.state_label()),
            zip: text(partner.zip.as_deref()),
            country_id: text(partner.country_label()),
            phone: text(partner.phone.as_deref()),
            mobile: text(partner.mobile.as_deref()),
            vat: text(partner.vat.as_deref()),
            document_type: text(partner.document_type.as_deref()),
            document_type_label: text(partner.document_kind().map(|k| k.label())),
            document_number: text(partner.document_number.as_deref()),
            address: partner.postal_address(),
            contact_phone: text(partner.contact_phone()),
        }
    }
}

/// A base orderline plus its internal note.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichedLine {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    #[serde(
        rename = "internalNote",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub internal_note: Option<String>,
}

impl EnrichedLine {
    /// Wrap a base line. When `internal_note` is set it replaces any
    /// `internalNote` the base line had; otherwise the line is kept as is.
    pub fn new(mut fields: Map<String, Value>, internal_note: Option<String>) -> Self {
        if internal_note.is_some() {
            fields.remove(INTERNAL_NOTE_KEY);
        }
        Self {
            fields,
            internal_note,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Base export plus customer, note, date and per-line internal notes.
///
/// Built fresh for each print request and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichedReceipt {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    #[serde(default)]
    pub orderlines: Vec<EnrichedLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner: Option<PartnerBlock>,
    #[serde(
        rename = "generalNote",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub general_note: Option<String>,
    #[serde(
        rename = "creationDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_date: Option<String>,
}

impl EnrichedReceipt {
    /// Base field by key (not the enrichment fields).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}
