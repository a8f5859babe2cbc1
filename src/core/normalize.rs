//! Conversion of recorded instants to the business wall clock.
//!
//! Punches are stored as absolute UTC instants; every grouping and display
//! decision happens on the configured fixed offset.

use crate::ui::messages::warning;
use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Express a UTC instant on the business wall clock.
pub fn to_business(ts: DateTime<Utc>, offset: FixedOffset) -> DateTime<FixedOffset> {
    ts.with_timezone(&offset)
}

/// Parse a recorded timestamp string into a UTC instant.
///
/// Accepts RFC 3339 (any offset, trailing Z included). A naive timestamp
/// without offset information is read as UTC before conversion.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }

    None
}

/// Render a recorded timestamp on the business wall clock
/// (DD/MM/YYYY HH:MM:SS).
///
/// A malformed value is returned unchanged with a warning: one bad record
/// must never abort a listing or report.
pub fn normalize_recorded(raw: &str, offset: FixedOffset) -> String {
    match parse_instant(raw) {
        Some(utc) => to_business(utc, offset)
            .format("%d/%m/%Y %H:%M:%S")
            .to_string(),
        None => {
            warning(format!("Unreadable timestamp '{raw}', kept as recorded"));
            raw.to_string()
        }
    }
}

/// UTC instants delimiting the business-local date range [start, end],
/// as a half-open window [lo, hi).
pub fn utc_window(
    start: NaiveDate,
    end: NaiveDate,
    offset: FixedOffset,
) -> (DateTime<Utc>, DateTime<Utc>) {
    let lo_local = start.and_hms_opt(0, 0, 0).unwrap();
    let hi_local = end
        .checked_add_days(Days::new(1))
        .unwrap_or(end)
        .and_hms_opt(0, 0, 0)
        .unwrap();

    // a fixed offset maps every local time to exactly one instant
    let lo = offset
        .from_local_datetime(&lo_local)
        .unwrap()
        .with_timezone(&Utc);
    let hi = offset
        .from_local_datetime(&hi_local)
        .unwrap()
        .with_timezone(&Utc);

    (lo, hi)
}
