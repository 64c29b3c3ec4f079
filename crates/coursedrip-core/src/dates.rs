//! Drip date parsing and display formatting.
//!
//! Release dates arrive as raw metadata strings authored in one of three
//! encodings: RFC 3339, a bare `YYYY-MM-DD` calendar date (interpreted as
//! midnight UTC), or an integer unix timestamp. [`parse_drip_date`] accepts
//! all three; everything downstream works with `DateTime<Utc>`.

use chrono::{DateTime, Locale, NaiveDate, TimeZone, Utc};

use crate::error::DateError;

/// Parse a raw drip date metadata value.
pub fn parse_drip_date(raw: &str) -> Result<DateTime<Utc>, DateError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(DateError::Unrecognized(raw.to_string()));
    }

    if is_timestamp(raw) {
        let secs: i64 = raw
            .parse()
            .map_err(|_| DateError::Unrecognized(raw.to_string()))?;
        return Utc
            .timestamp_opt(secs, 0)
            .single()
            .ok_or(DateError::TimestampOutOfRange(secs));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        // Calendar dates release at midnight UTC.
        let midnight = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| DateError::Unrecognized(raw.to_string()))?;
        return Ok(midnight.and_utc());
    }

    Err(DateError::Unrecognized(raw.to_string()))
}

/// Format a date with the host's display format.
pub fn format_date(date: &DateTime<Utc>, format: &str) -> String {
    date.format(format).to_string()
}

/// Format a date with the host's display format, localized.
pub fn format_date_localized(date: &DateTime<Utc>, format: &str, locale: Locale) -> String {
    date.format_localized(format, locale).to_string()
}

fn is_timestamp(raw: &str) -> bool {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
