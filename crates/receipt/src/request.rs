//! Print request payload as the front end sends it to `enrich-receipt`.

use serde::{Deserialize, Serialize};

use posdelivery_parties::Partner;
use posdelivery_sales::{PartnerDirectory, PosOrder};

use crate::config::ReceiptConfig;
use crate::enricher::{Enrichment, ReceiptEnricher};
use crate::export::BaseExport;

/// `{ "order": {...}, "base": {...}, "partners": [...] }`
///
/// `partners` are the session's loaded customers, used when the order only
/// carries a `partner_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrintRequest {
    pub order: PosOrder,
    #[serde(default)]
    pub base: BaseExport,
    #[serde(default)]
    pub partners: Vec<Partner>,
}

impl PrintRequest {
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn enrich(self, config: ReceiptConfig) -> Enrichment {
        let directory: PartnerDirectory = self.partners.into_iter().collect();
        ReceiptEnricher::with_directory(config, directory).enrich(&self.order, self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_base_and_partners_default_to_empty() {
        let request = PrintRequest::from_json(r#"{ "order": {} }"#).unwrap();
        assert!(request.partners.is_empty());
        assert!(request.base.orderlines.is_empty());

        let out = request.enrich(ReceiptConfig::default());
        assert!(out.is_clean());
        assert!(out.receipt.partner.is_none());
    }

    #[test]
    fn order_is_required() {
        assert!(PrintRequest::from_json(r#"{ "base": {} }"#).is_err());
    }
}
