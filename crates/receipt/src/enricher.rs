//! The receipt enrichment transform.

use posdelivery_sales::{EmbeddedPartner, Fallback, PartnerDirectory, PartnerResolver, PosOrder};

use crate::config::ReceiptConfig;
use crate::error::{ReceiptError, ReceiptResult};
use crate::export::{
    BaseExport, CREATION_DATE_KEY, EnrichedLine, EnrichedReceipt, GENERAL_NOTE_KEY, PARTNER_KEY,
    PartnerBlock,
};
use crate::timestamp::render_order_timestamp;

/// Outcome of enriching one receipt.
///
/// The receipt is always produced. Fields that could not be rendered are left
/// out and reported in `field_errors` so printing can go ahead.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrichment {
    pub receipt: EnrichedReceipt,
    pub field_errors: Vec<ReceiptError>,
}

impl Enrichment {
    pub fn is_clean(&self) -> bool {
        self.field_errors.is_empty()
    }

    /// Strict mode: the first field error fails the whole receipt.
    pub fn into_result(self) -> ReceiptResult<EnrichedReceipt> {
        match self.field_errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.receipt),
        }
    }
}

/// Adds customer, note, date and internal line notes to a base export.
///
/// Stateless apart from its configuration and partner resolver; calling
/// [`enrich`](Self::enrich) twice with the same inputs yields the same
/// receipt.
#[derive(Debug, Clone)]
pub struct ReceiptEnricher<R> {
    config: ReceiptConfig,
    resolver: R,
}

impl ReceiptEnricher<EmbeddedPartner> {
    /// Enricher for front ends that embed the partner on the order.
    pub fn embedded(config: ReceiptConfig) -> Self {
        Self::new(config, EmbeddedPartner)
    }
}

impl ReceiptEnricher<Fallback<EmbeddedPartner, PartnerDirectory>> {
    /// Embedded partner first, then a lookup of `partner_id` in `directory`.
    pub fn with_directory(config: ReceiptConfig, directory: PartnerDirectory) -> Self {
        Self::new(config, Fallback::new(EmbeddedPartner, directory))
    }
}

impl<R: PartnerResolver> ReceiptEnricher<R> {
    pub fn new(config: ReceiptConfig, resolver: R) -> Self {
        Self { config, resolver }
    }

    pub fn config(&self) -> &ReceiptConfig {
        &self.config
    }

    /// Render an order timestamp in the configured zone and locale.
    pub fn format_creation_date(&self, raw: &str) -> ReceiptResult<String> {
        render_order_timestamp(raw, self.config.timezone(), self.config.locale())
    }

    pub fn enrich(&self, order: &PosOrder, base: BaseExport) -> Enrichment {
        let order_ref = order.log_ref();
        let BaseExport {
            orderlines,
            mut fields,
        } = base;
        let mut field_errors = Vec::new();

        let mut partner = None;
        if let Some(resolved) = self.resolver.resolve_partner(order) {
            fields.remove(PARTNER_KEY);
            partner = Some(PartnerBlock::from(&resolved));
        }
        tracing::debug!(order_ref = %order_ref, has_partner = partner.is_some(), "resolved receipt partner");

        let mut general_note = None;
        if let Some(note) = order.general_note_text() {
            fields.remove(GENERAL_NOTE_KEY);
            general_note = Some(note.to_string());
        }

        // A base date never outlives the order's own date_order, even when the
        // latter fails to parse.
        let mut creation_date = None;
        if let Some(raw) = order.date_order.as_deref() {
            fields.remove(CREATION_DATE_KEY);
            match self.format_creation_date(raw) {
                Ok(rendered) => {
                    tracing::debug!(order_ref = %order_ref, creation_date = %rendered, "formatted order date");
                    creation_date = Some(rendered);
                }
                Err(err) => {
                    tracing::warn!(order_ref = %order_ref, error = %err, "order date left blank on receipt");
                    field_errors.push(err);
                }
            }
        }

        if orderlines.len() != order.lines.len() {
            tracing::debug!(
                order_ref = %order_ref,
                printed = orderlines.len(),
                ordered = order.lines.len(),
                "orderline count mismatch; unmatched lines stay unenriched"
            );
        }

        let orderlines = orderlines
            .into_iter()
            .enumerate()
            .map(|(index, line)| {
                let note = order
                    .line_at(index)
                    .and_then(|l| l.note_text())
                    .map(str::to_string);
                if note.is_some() {
                    tracing::trace!(order_ref = %order_ref, line = index, "internal note attached");
                }
                EnrichedLine::new(line, note)
            })
            .collect();

        Enrichment {
            receipt: EnrichedReceipt {
                fields,
                orderlines,
                partner,
                general_note,
                creation_date,
            },
            field_errors,
        }
    }
}
