//! Receipt configuration: locale and civil timezone.
//!
//! Both are deployment concerns. They are validated once, when the config is
//! built, so a bad value fails startup instead of every receipt.

use chrono_tz::Tz;

use crate::error::{ReceiptError, ReceiptResult};
use crate::locale::ReceiptLocale;

pub const LOCALE_ENV: &str = "POS_RECEIPT_LOCALE";
pub const TIMEZONE_ENV: &str = "POS_RECEIPT_TIMEZONE";

pub const DEFAULT_LOCALE: ReceiptLocale = ReceiptLocale::EsCo;
pub const DEFAULT_TIMEZONE: Tz = Tz::America__Bogota;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptConfig {
    locale: ReceiptLocale,
    timezone: Tz,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE,
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl ReceiptConfig {
    /// Build from a locale tag (`es-CO`) and an IANA zone (`America/Bogota`).
    pub fn new(locale: &str, timezone: &str) -> ReceiptResult<Self> {
        Ok(Self {
            locale: locale.parse()?,
            timezone: parse_timezone(timezone)?,
        })
    }

    /// Defaults with optional overrides, as they come from flags or the
    /// `POS_RECEIPT_LOCALE` / `POS_RECEIPT_TIMEZONE` variables. Blank values
    /// keep the default.
    pub fn from_overrides(locale: Option<&str>, timezone: Option<&str>) -> ReceiptResult<Self> {
        let mut config = Self::default();
        if let Some(locale) = present(locale) {
            config.locale = locale.parse()?;
        }
        if let Some(timezone) = present(timezone) {
            config.timezone = parse_timezone(timezone)?;
        }
        Ok(config)
    }

    pub fn with_locale(mut self, locale: ReceiptLocale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn locale(&self) -> ReceiptLocale {
        self.locale
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_timezone(name: &str) -> ReceiptResult<Tz> {
    let name = name.trim();
    name.parse::<Tz>()
        .map_err(|_| ReceiptError::UnknownTimezone(name.to_string()))
}
