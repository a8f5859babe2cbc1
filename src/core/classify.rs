//! Per-day anomaly classification against the standard shift.

use crate::models::annotation::Annotation;
use crate::models::punch::Punch;
use crate::utils::date::is_weekend;
use crate::utils::time::format_signed_minutes;
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Assign the automatic remark for one day. First match wins:
/// weekend days with punches are compensated and never judged for shift
/// length; a weekday without punches is an absence; otherwise the worked
/// total decides.
pub fn classify(
    date: NaiveDate,
    day_punches: &[Punch],
    worked_minutes: i64,
    shift_minutes: i64,
) -> Annotation {
    if is_weekend(date) {
        return Annotation::Compensated;
    }

    if day_punches.is_empty() {
        return Annotation::Absence;
    }

    match worked_minutes.cmp(&shift_minutes) {
        Ordering::Less => Annotation::IncompleteShift,
        Ordering::Greater => Annotation::Overtime,
        Ordering::Equal => Annotation::Ok,
    }
}

/// Signed surplus or deficit against the standard shift, as "+H:MM",
/// "-H:MM" or "0:00". A day where no interval closed reports "0:00"
/// rather than a full-shift deficit.
pub fn balance(worked_minutes: i64, shift_minutes: i64) -> String {
    if worked_minutes == 0 {
        return "0:00".to_string();
    }
    format_signed_minutes(worked_minutes - shift_minutes)
}
