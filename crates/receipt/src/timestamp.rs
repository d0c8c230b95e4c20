//! Order timestamps: parsing the backend's UTC strings and converting them to
//! the shop's civil time.
//!
//! The backend stores `date_order` as a naive `YYYY-MM-DD HH:MM:SS` string that
//! is UTC. Reading it as local time shifts receipts by the zone offset, so it is
//! always pinned to UTC first.

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::{ReceiptError, ReceiptResult};
use crate::locale::ReceiptLocale;

pub const DATE_ORDER_FIELD: &str = "date_order";

const NAIVE_UTC_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Parse an order timestamp as an instant.
///
/// Naive strings are UTC. Strings carrying an explicit offset (RFC 3339) keep
/// it.
pub fn parse_order_timestamp(raw: &str) -> ReceiptResult<DateTime<Utc>> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ReceiptError::format(DATE_ORDER_FIELD, raw, "empty timestamp"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    NAIVE_UTC_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| {
            ReceiptError::format(
                DATE_ORDER_FIELD,
                raw,
                "expected `YYYY-MM-DD HH:MM:SS` (UTC) or RFC 3339",
            )
        })
}

/// Wall-clock time of `instant` in `zone`.
pub fn to_civil(instant: DateTime<Utc>, zone: Tz) -> DateTime<Tz> {
    instant.with_timezone(&zone)
}

/// Parse, convert and render in one step.
pub fn render_order_timestamp(raw: &str, zone: Tz, locale: ReceiptLocale) -> ReceiptResult<String> {
    let instant = parse_order_timestamp(raw)?;
    Ok(locale.format_datetime(&to_civil(instant, zone)))
}
