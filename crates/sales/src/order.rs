use serde::{Deserialize, Serialize};

use posdelivery_core::reference::falsy;
use posdelivery_core::{OrderId, PartnerId};
use posdelivery_parties::Partner;

/// Order line: product plus an optional kitchen/internal note.
///
/// Lines carry no identifier the printed export could be joined on; their
/// position in [`PosOrder::lines`] is the correlation key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(default, alias = "productName", alias = "full_product_name")]
    pub product_name: String,
    #[serde(default, deserialize_with = "falsy::string")]
    pub note: Option<String>,
}

impl OrderLine {
    pub fn new(product_name: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// The note if it has any visible content.
    pub fn note_text(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.trim().is_empty())
    }
}

/// A point-of-sale order at the moment its receipt is printed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosOrder {
    #[serde(default, deserialize_with = "falsy::value")]
    pub id: Option<OrderId>,
    /// Order reference shown to the cashier (e.g. `Order 00012-003-0004`).
    #[serde(default, deserialize_with = "falsy::string")]
    pub name: Option<String>,
    /// Customer loaded onto the order, when the front end embeds it.
    #[serde(default, deserialize_with = "falsy::value")]
    pub partner: Option<Partner>,
    /// Customer id, for front ends that only carry the reference.
    #[serde(default, deserialize_with = "falsy::value")]
    pub partner_id: Option<PartnerId>,
    #[serde(default, alias = "generalNote", deserialize_with = "falsy::string")]
    pub general_note: Option<String>,
    /// Order timestamp as stored by the backend: UTC, `YYYY-MM-DD HH:MM:SS`.
    #[serde(default, deserialize_with = "falsy::string")]
    pub date_order: Option<String>,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

impl PosOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_partner(mut self, partner: Partner) -> Self {
        self.partner = Some(partner);
        self
    }

    pub fn with_partner_id(mut self, partner_id: PartnerId) -> Self {
        self.partner_id = Some(partner_id);
        self
    }

    pub fn with_general_note(mut self, note: impl Into<String>) -> Self {
        self.general_note = Some(note.into());
        self
    }

    pub fn with_date_order(mut self, date_order: impl Into<String>) -> Self {
        self.date_order = Some(date_order.into());
        self
    }

    pub fn with_line(mut self, line: OrderLine) -> Self {
        self.lines.push(line);
        self
    }

    /// The general note if it has any visible content.
    pub fn general_note_text(&self) -> Option<&str> {
        self.general_note
            .as_deref()
            .filter(|n| !n.trim().is_empty())
    }

    /// Line at `index`, the position shared with the printed export.
    pub fn line_at(&self, index: usize) -> Option<&OrderLine> {
        self.lines.get(index)
    }

    /// Reference used in logs: the order name, else the id.
    pub fn log_ref(&self) -> String {
        match (&self.name, self.id) {
            (Some(name), _) => name.clone(),
            (None, Some(id)) => id.to_string(),
            (None, None) => "unsaved".to_string(),
        }
    }
}
