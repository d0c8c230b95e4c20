//! Date-time rendering per receipt locale.

use core::str::FromStr;

use chrono::{DateTime, TimeZone, Timelike};

use crate::error::ReceiptError;

/// Locales the receipt printer knows how to render dates for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReceiptLocale {
    /// Colombian Spanish: `07/11/2025, 10:43:39 p. m.`
    #[default]
    EsCo,
    /// US English: `11/07/2025, 10:43:39 PM`
    EnUs,
    /// Sortable 24-hour form: `2025-11-07 22:43:39`
    Iso,
}

impl ReceiptLocale {
    pub fn tag(self) -> &'static str {
        match self {
            ReceiptLocale::EsCo => "es-CO",
            ReceiptLocale::EnUs => "en-US",
            ReceiptLocale::Iso => "iso",
        }
    }

    /// Render a civil date-time: two-digit date parts, seconds included,
    /// 12-hour clock except for [`ReceiptLocale::Iso`].
    pub fn format_datetime<Tz: TimeZone>(self, value: &DateTime<Tz>) -> String
    where
        Tz::Offset: core::fmt::Display,
    {
        match self {
            ReceiptLocale::EsCo => {
                let (pm, _) = value.hour12();
                let suffix = if pm { "p. m." } else { "a. m." };
                format!("{} {}", value.format("%d/%m/%Y, %I:%M:%S"), suffix)
            }
            ReceiptLocale::EnUs => value.format("%m/%d/%Y, %I:%M:%S %p").to_string(),
            ReceiptLocale::Iso => value.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

impl FromStr for ReceiptLocale {
    type Err = ReceiptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().replace('_', "-").to_ascii_lowercase();
        match tag.as_str() {
            "es-co" | "es" => Ok(ReceiptLocale::EsCo),
            "en-us" | "en" => Ok(ReceiptLocale::EnUs),
            "iso" => Ok(ReceiptLocale::Iso),
            _ => Err(ReceiptError::UnsupportedLocale(s.trim().to_string())),
        }
    }
}

impl core::fmt::Display for ReceiptLocale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn es_co_uses_day_first_and_spanish_meridiem() {
        assert_eq!(
            ReceiptLocale::EsCo.format_datetime(&at(22, 43, 39)),
            "04/03/2025, 10:43:39 p. m."
        );
        assert_eq!(
            ReceiptLocale::EsCo.format_datetime(&at(9, 5, 1)),
            "04/03/2025, 09:05:01 a. m."
        );
    }

    #[test]
    fn midnight_and_noon_render_as_twelve() {
        assert_eq!(
            ReceiptLocale::EsCo.format_datetime(&at(0, 0, 0)),
            "04/03/2025, 12:00:00 a. m."
        );
        assert_eq!(
            ReceiptLocale::EnUs.format_datetime(&at(12, 30, 0)),
            "03/04/2025, 12:30:00 PM"
        );
    }

    #[test]
    fn iso_is_twenty_four_hour() {
        assert_eq!(
            ReceiptLocale::Iso.format_datetime(&at(22, 43, 39)),
            "2025-03-04 22:43:39"
        );
    }

    #[test]
    fn parses_tags_loosely() {
        assert_eq!("es-CO".parse::<ReceiptLocale>().unwrap(), ReceiptLocale::EsCo);
        assert_eq!("es_co".parse::<ReceiptLocale>().unwrap(), ReceiptLocale::EsCo);
        assert_eq!(" en-US ".parse::<ReceiptLocale>().unwrap(), ReceiptLocale::EnUs);
        assert_eq!(
            "fr-FR".parse::<ReceiptLocale>().unwrap_err(),
            ReceiptError::UnsupportedLocale("fr-FR".to_string())
        );
    }
}
