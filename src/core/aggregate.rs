use crate::models::punch::Punch;
use chrono::{FixedOffset, NaiveDate};
use std::collections::BTreeMap;

/// Group punches by their business-local calendar date.
///
/// Input order is preserved inside each bucket; the shift calculator
/// re-sorts by timestamp anyway, so callers only need per-day sortable
/// input, not globally chronological input.
pub fn group_by_day(punches: &[Punch], offset: FixedOffset) -> BTreeMap<NaiveDate, Vec<Punch>> {
    let mut days: BTreeMap<NaiveDate, Vec<Punch>> = BTreeMap::new();

    for punch in punches {
        days.entry(punch.local_date(offset))
            .or_default()
            .push(punch.clone());
    }

    days
}
