use serde::{Deserialize, Serialize};

use posdelivery_core::reference::falsy;
use posdelivery_core::{DisplayRef, PartnerId, Record};

use crate::document::DocumentType;

/// A customer record as loaded into the point of sale.
///
/// Every attribute is optional: partners are created at the counter with
/// whatever the cashier typed. Empty values may arrive as `false` or `null`
/// and decode to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    #[serde(default, deserialize_with = "falsy::value")]
    pub id: Option<PartnerId>,
    #[serde(default, deserialize_with = "falsy::string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "falsy::string")]
    pub street: Option<String>,
    #[serde(default, deserialize_with = "falsy::string")]
    pub street2: Option<String>,
    #[serde(default, deserialize_with = "falsy::string")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "falsy::display_ref")]
    pub state_id: Option<DisplayRef>,
    #[serde(default, deserialize_with = "falsy::string")]
    pub zip: Option<String>,
    #[serde(default, deserialize_with = "falsy::display_ref")]
    pub country_id: Option<DisplayRef>,
    #[serde(default, deserialize_with = "falsy::string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "falsy::string")]
    pub mobile: Option<String>,
    #[serde(default, deserialize_with = "falsy::string")]
    pub vat: Option<String>,
    /// Selection code (`cc`, `ce`, `ti`, `passport`, `other`).
    #[serde(default, deserialize_with = "falsy::string")]
    pub document_type: Option<String>,
    #[serde(default, deserialize_with = "falsy::string")]
    pub document_number: Option<String>,
}

impl Partner {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn state_label(&self) -> Option<&str> {
        self.state_id.as_ref().map(DisplayRef::label)
    }

    pub fn country_label(&self) -> Option<&str> {
        self.country_id.as_ref().map(DisplayRef::label)
    }

    /// Typed document type; `None` when unset or not a known code.
    pub fn document_kind(&self) -> Option<DocumentType> {
        self.document_type.as_deref()?.parse().ok()
    }

    /// Single-line postal address: street, street2, city, state, zip.
    ///
    /// Blank parts are skipped; an empty string means no address at all.
    pub fn postal_address(&self) -> String {
        [
            self.street.as_deref(),
            self.street2.as_deref(),
            self.city.as_deref(),
            self.state_label(),
            self.zip.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// Number the courier should call: phone, else mobile.
    pub fn contact_phone(&self) -> Option<&str> {
        non_blank(self.phone.as_deref()).or_else(|| non_blank(self.mobile.as_deref()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl Record for Partner {
    type Id = Option<PartnerId>;

    fn record_id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}
