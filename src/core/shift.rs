//! Worked-time calculation over one day's punches.

use crate::models::punch::Punch;

/// Total worked seconds for a day.
///
/// Events are sorted chronologically, then scanned left to right: an
/// Entry immediately followed by an Exit closes one interval and the scan
/// jumps past both; any other arrangement advances by one and the event
/// is dropped from pairing, contributing no duration. Odd or out-of-order
/// sequences therefore degrade instead of erroring.
pub fn worked_seconds(day_punches: &[Punch]) -> i64 {
    if day_punches.len() < 2 {
        return 0;
    }

    let mut sorted = day_punches.to_vec();
    sorted.sort_by_key(|p| p.timestamp);

    let mut total = 0;
    let mut i = 0;

    while i + 1 < sorted.len() {
        if sorted[i].kind.is_entry() && sorted[i + 1].kind.is_exit() {
            total += (sorted[i + 1].timestamp - sorted[i].timestamp).num_seconds();
            i += 2;
        } else {
            i += 1;
        }
    }

    total
}

/// Total worked minutes for a day. Seconds are summed across the
/// intervals first and truncated once, not per interval.
pub fn worked_minutes(day_punches: &[Punch]) -> i64 {
    worked_seconds(day_punches) / 60
}
