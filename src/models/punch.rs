use super::punch_kind::PunchKind;
use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Punch {
    pub id: i64,
    pub employee_id: i64,   // ⇔ punches.employee_id (FK, cascade on delete)
    pub timestamp: DateTime<Utc>, // ⇔ punches.timestamp (TEXT, RFC 3339 UTC)
    pub kind: PunchKind,    // ⇔ punches.kind ('entry' | 'exit')
    pub note: Option<String>, // ⇔ punches.note (admin remark, only mutable field)
    pub source: String,     // ⇔ punches.source ('server' | 'client' | 'server-fallback')
}

impl Punch {
    /// Constructor for punches created by the registration flow.
    /// The id is assigned by the database on insert.
    pub fn new(employee_id: i64, timestamp: DateTime<Utc>, kind: PunchKind, source: &str) -> Self {
        Self {
            id: 0,
            employee_id,
            timestamp,
            kind,
            note: None,
            source: source.to_string(),
        }
    }

    /// Storage representation of the instant.
    pub fn timestamp_str(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    }

    /// Calendar date of this punch on the business wall clock.
    pub fn local_date(&self, offset: FixedOffset) -> NaiveDate {
        self.timestamp.with_timezone(&offset).date_naive()
    }

    pub fn local_time_str(&self, offset: FixedOffset) -> String {
        self.timestamp
            .with_timezone(&offset)
            .format("%H:%M")
            .to_string()
    }

    pub fn local_date_str(&self, offset: FixedOffset) -> String {
        self.timestamp
            .with_timezone(&offset)
            .format("%d/%m/%Y")
            .to_string()
    }
}
