//! Billing-period date arithmetic.

use chrono::{DateTime, Utc};

pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Whole days between `now` and `end`, rounded up from the millisecond
/// difference.
///
/// Negative when the end is already past; display surfaces clamp at zero
/// before showing the value. An out-of-range timestamp yields zero.
pub fn remaining_days(now: DateTime<Utc>, end_epoch_secs: i64) -> i64 {
    let end = match DateTime::from_timestamp(end_epoch_secs, 0) {
        Some(end) => end,
        None => return 0,
    };

    let diff = end.signed_duration_since(now).num_milliseconds();
    let days = diff.div_euclid(MILLIS_PER_DAY);
    if diff.rem_euclid(MILLIS_PER_DAY) > 0 {
        days + 1
    } else {
        days
    }
}

/// Render an epoch-seconds timestamp as "5 Jun 2024", in UTC.
///
/// An out-of-range timestamp renders as an empty string rather than
/// failing the caller.
pub fn format_date(epoch_secs: i64) -> String {
    match DateTime::from_timestamp(epoch_secs, 0) {
        Some(date) => date.format("%-d %b %Y").to_string(),
        None => String::new(),
    }
}
