use crate::core::normalize::normalize_recorded;
use crate::models::punch::Punch;
use chrono::FixedOffset;
use serde::Serialize;

/// Flat punch row for history output: the raw recorded instant plus the
/// business-local renderings consumers actually display.
#[derive(Serialize, Clone, Debug)]
pub struct PunchRecord {
    pub id: i64,
    pub employee_id: i64,
    pub employee: String,
    pub kind: String,
    pub timestamp: String,       // raw, RFC 3339 UTC
    pub timestamp_local: String, // DD/MM/YYYY HH:MM:SS
    pub date: String,            // business-local DD/MM/YYYY
    pub time: String,            // business-local HH:MM
    pub note: String,
    pub source: String,
}

impl PunchRecord {
    pub fn from_punch(punch: &Punch, employee_name: &str, offset: FixedOffset) -> Self {
        let raw = punch.timestamp_str();
        Self {
            id: punch.id,
            employee_id: punch.employee_id,
            employee: employee_name.to_string(),
            kind: punch.kind.to_db_str().to_string(),
            timestamp_local: normalize_recorded(&raw, offset),
            timestamp: raw,
            date: punch.local_date_str(offset),
            time: punch.local_time_str(offset),
            note: punch.note.clone().unwrap_or_default(),
            source: punch.source.clone(),
        }
    }
}
