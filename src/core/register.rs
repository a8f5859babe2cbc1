//! Punch registration service.

use crate::core::normalize::parse_instant;
use crate::core::resolve::next_kind;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{employee_by_id, insert_punch, most_recent_punch};
use crate::errors::{AppError, AppResult};
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use crate::ui::messages::warning;
use chrono::{DateTime, FixedOffset, Utc};
use rusqlite::TransactionBehavior;

/// Outcome of a registration, with the instant already rendered on the
/// business wall clock for immediate display.
#[derive(Debug, Clone)]
pub struct RegisteredPunch {
    pub punch_id: i64,
    pub recorded_kind: PunchKind,
    pub next_kind: PunchKind,
    pub local_time: String, // HH:MM:SS
    pub local_date: String, // DD/MM/YYYY
    pub source: &'static str,
}

/// Where the recorded instant came from.
fn resolve_instant(client_timestamp: Option<&str>) -> (DateTime<Utc>, &'static str) {
    match client_timestamp {
        None => (Utc::now(), "server"),
        Some(raw) => match parse_instant(raw) {
            Some(utc) => (utc, "client"),
            None => {
                warning(format!(
                    "Unreadable timestamp '{raw}', falling back to the server clock"
                ));
                (Utc::now(), "server-fallback")
            }
        },
    }
}

/// Record the next punch for an employee.
///
/// The kind is never chosen by the caller: it is the toggle of the most
/// recent punch. The read-toggle-insert sequence runs inside an immediate
/// transaction, so two concurrent registrations for the same employee
/// cannot both observe the same last punch.
pub fn register_punch(
    pool: &mut DbPool,
    employee_id: i64,
    client_timestamp: Option<&str>,
    offset: FixedOffset,
) -> AppResult<RegisteredPunch> {
    let employee = employee_by_id(&pool.conn, employee_id)?
        .ok_or(AppError::EmployeeNotFound(employee_id))?;

    let (instant, source) = resolve_instant(client_timestamp);

    let tx = pool
        .conn
        .transaction_with_behavior(TransactionBehavior::Immediate)?;

    let last = most_recent_punch(&tx, employee_id)?;
    let kind = next_kind(last.map(|p| p.kind));

    let punch = Punch::new(employee_id, instant, kind, source);
    let punch_id = insert_punch(&tx, &punch)?;

    ttlog(
        &tx,
        "punch",
        &employee.username,
        &format!("{} recorded at {}", kind.label(), punch.timestamp_str()),
    )?;

    tx.commit()?;

    let local = instant.with_timezone(&offset);

    Ok(RegisteredPunch {
        punch_id,
        recorded_kind: kind,
        next_kind: kind.toggle(),
        local_time: local.format("%H:%M:%S").to_string(),
        local_date: local.format("%d/%m/%Y").to_string(),
        source,
    })
}
