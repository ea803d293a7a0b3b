//! Calendar date keys and bounded date ranges.
//!
//! Every date in the system is addressed by a canonical `YYYY-MM-DD` key,
//! which doubles as the map key in the completion log. The core never
//! reads the system clock; "today" is an injected configuration value.

use chrono::{Duration, NaiveDate};

use crate::error::{CoreError, Result};

/// Canonical date-key format.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Reference date the product ships with when no clock is configured.
pub const DEFAULT_TODAY: &str = "2026-01-07";

/// Parse a canonical date key into a calendar date.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if the key is not a valid
/// `YYYY-MM-DD` date.
pub fn parse_date_key(key: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
        .map_err(|e| CoreError::InvalidArgument(format!("malformed date key '{key}': {e}")))
}

/// Format a calendar date as a canonical date key.
pub fn to_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Produce exactly `n` consecutive date keys ending at and including `end`,
/// ordered oldest to newest. Month and year boundaries use real calendar
/// arithmetic. `n == 0` yields an empty sequence.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if `end` is malformed.
pub fn date_keys_for_last_n(end: &str, n: usize) -> Result<Vec<String>> {
    let end = parse_date_key(end)?;
    let mut keys = Vec::with_capacity(n);
    for offset in (0..n as i64).rev() {
        keys.push(to_date_key(end - Duration::days(offset)));
    }
    Ok(keys)
}

/// Short human-readable label for a date key, e.g. `"Jan 07"`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidArgument`] if the key is malformed.
pub fn format_short(key: &str) -> Result<String> {
    Ok(parse_date_key(key)?.format("%b %d").to_string())
}
