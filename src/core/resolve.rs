//! Next-punch-kind resolution.
//!
//! The expected kind is derived from the event log, never stored: both
//! registration and the status query go through `next_kind`, so the two
//! cannot drift.

use crate::db::queries::{employee_by_id, most_recent_punch};
use crate::errors::{AppError, AppResult};
use crate::models::punch_kind::PunchKind;
use chrono::{DateTime, Utc};
use rusqlite::Connection;

#[derive(Debug, Clone)]
pub struct PunchStatus {
    pub next_kind: PunchKind,
    pub last_kind: Option<PunchKind>,
    pub last_timestamp: Option<DateTime<Utc>>,
}

/// Strict two-state alternation: no punch yet means Entry, otherwise the
/// opposite of the last one.
pub fn next_kind(last: Option<PunchKind>) -> PunchKind {
    match last {
        Some(kind) => kind.toggle(),
        None => PunchKind::Entry,
    }
}

/// Resolve what the employee's next punch will be recorded as.
pub fn resolve_status(conn: &Connection, employee_id: i64) -> AppResult<PunchStatus> {
    employee_by_id(conn, employee_id)?.ok_or(AppError::EmployeeNotFound(employee_id))?;

    let last = most_recent_punch(conn, employee_id)?;

    Ok(PunchStatus {
        next_kind: next_kind(last.as_ref().map(|p| p.kind)),
        last_kind: last.as_ref().map(|p| p.kind),
        last_timestamp: last.map(|p| p.timestamp),
    })
}
