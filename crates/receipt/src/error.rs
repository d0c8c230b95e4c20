use thiserror::Error;

pub type ReceiptResult<T> = Result<T, ReceiptError>;

/// Errors raised while building a receipt.
///
/// `Format` is field-level: the receipt is still produced with that field left
/// blank. The other variants are configuration errors, raised once when the
/// enricher is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReceiptError {
    #[error("cannot format {field} from {value:?}: {reason}")]
    Format {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("unsupported locale: {0}")]
    UnsupportedLocale(String),
}

impl ReceiptError {
    pub fn format(field: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Format {
            field,
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Whether the error only affects a single receipt field.
    pub fn is_field_level(&self) -> bool {
        matches!(self, Self::Format { .. })
    }
}
