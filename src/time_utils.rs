// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, SecondsFormat, Utc};

/// Number of trailing timestamp digits used for workout ids.
const ID_DIGITS: usize = 10;

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a timestamp as "<Month> <day>", e.g. "March 5".
pub fn format_month_day(date: DateTime<Utc>) -> String {
    date.format("%B %-d").to_string()
}

/// Derive a workout id from the last ten digits of the millisecond timestamp.
pub fn timestamp_id(date: DateTime<Utc>) -> String {
    let millis = date.timestamp_millis().to_string();
    let start = millis.len().saturating_sub(ID_DIGITS);
    millis[start..].to_string()
}
