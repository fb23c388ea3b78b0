//! Locale-aware "month + year" date display.
//!
//! Callers treat formatting failure as recoverable: they fall back to the raw
//! input string and never surface the error.

use chrono::{DateTime, Datelike, Locale, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DateFormatError {
    #[error("date value is empty")]
    Empty,

    #[error("unrecognized date '{0}'")]
    Unparseable(String),
}

/// Formats an ISO date string for display in a given locale.
pub trait DateFormatter: Send + Sync {
    fn format(&self, iso: &str, locale: &str) -> Result<String, DateFormatError>;
}

/// Default formatter: abbreviated month and numeric year, e.g. `May 1990`
/// (`en`) or `1990年5月` (`zh`). Unknown locales render in English.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthYearFormatter;

impl DateFormatter for MonthYearFormatter {
    fn format(&self, iso: &str, locale: &str) -> Result<String, DateFormatError> {
        let date = parse_iso_date(iso)?;
        let year = date.year();
        let month = date.month();

        let formatted = match language(locale).as_str() {
            "zh" | "ja" => format!("{year}年{month}月"),
            "ko" => format!("{year}년 {month}월"),
            lang => Utc
                .from_utc_datetime(&date.and_time(NaiveTime::MIN))
                .format_localized("%b %Y", month_locale(lang))
                .to_string(),
        };
        Ok(formatted)
    }
}

/// Locale whose abbreviated month names are used for a language subtag.
fn month_locale(lang: &str) -> Locale {
    match lang {
        "de" => Locale::de_DE,
        "fr" => Locale::fr_FR,
        "es" => Locale::es_ES,
        _ => Locale::en_US,
    }
}

/// Primary language subtag, lowercased: `zh-CN` → `zh`, `en_US` → `en`.
pub fn language(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

/// Accepts `YYYY-MM-DD`, `YYYY-MM`, naive `YYYY-MM-DDTHH:MM:SS`, and RFC 3339.
pub fn parse_iso_date(raw: &str) -> Result<NaiveDate, DateFormatError> {
    let s = raw.trim();
    if s.is_empty() {
        return Err(DateFormatError::Empty);
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d"))
        .map_err(|_| DateFormatError::Unparseable(s.to_string()))
}
