use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::punch::Punch;
use crate::models::punch_kind::PunchKind;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, Result, Row, params, params_from_iter};

// ---------------------------------------------------------------------------
// Punches
// ---------------------------------------------------------------------------

pub fn map_punch_row(row: &Row) -> Result<Punch> {
    let ts_str: String = row.get("timestamp")?;
    let timestamp = DateTime::parse_from_rfc3339(&ts_str)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                Type::Text,
                Box::new(AppError::InvalidTimestamp(ts_str.clone())),
            )
        })?;

    let kind_str: String = row.get("kind")?;
    let kind = PunchKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            Type::Text,
            Box::new(AppError::InvalidKind(kind_str.clone())),
        )
    })?;

    Ok(Punch {
        id: row.get("id")?,
        employee_id: row.get("employee_id")?,
        timestamp,
        kind,
        note: row.get("note")?,
        source: row.get("source")?,
    })
}

pub fn insert_punch(conn: &Connection, punch: &Punch) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO punches (employee_id, timestamp, kind, note, source)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            punch.employee_id,
            punch.timestamp_str(),
            punch.kind.to_db_str(),
            punch.note,
            punch.source,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Latest punch for an employee, if any.
pub fn most_recent_punch(conn: &Connection, employee_id: i64) -> AppResult<Option<Punch>> {
    let mut stmt = conn.prepare_cached(
        "SELECT * FROM punches
         WHERE employee_id = ?1
         ORDER BY timestamp DESC, id DESC
         LIMIT 1",
    )?;

    let mut rows = stmt.query_map([employee_id], map_punch_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

/// Filtered punch listing. The UTC window is half-open: [lo, hi).
/// Results are newest first unless `ascending` is set (report order).
pub fn query_punches(
    conn: &Connection,
    employee_id: Option<i64>,
    window: Option<(DateTime<Utc>, DateTime<Utc>)>,
    kind: Option<PunchKind>,
    ascending: bool,
) -> AppResult<Vec<Punch>> {
    let mut clauses: Vec<&str> = Vec::new();
    let mut values: Vec<String> = Vec::new();

    if let Some(id) = employee_id {
        clauses.push("employee_id = ?");
        values.push(id.to_string());
    }

    if let Some((lo, hi)) = window {
        clauses.push("timestamp >= ?");
        values.push(lo.to_rfc3339_opts(SecondsFormat::Secs, true));
        clauses.push("timestamp < ?");
        values.push(hi.to_rfc3339_opts(SecondsFormat::Secs, true));
    }

    if let Some(k) = kind {
        clauses.push("kind = ?");
        values.push(k.to_db_str().to_string());
    }

    let mut sql = String::from("SELECT * FROM punches");
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }
    sql.push_str(if ascending {
        " ORDER BY timestamp ASC, id ASC"
    } else {
        " ORDER BY timestamp DESC, id DESC"
    });

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), map_punch_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Update the only mutable punch field. Everything else is immutable
/// once recorded.
pub fn update_punch_note(conn: &Connection, punch_id: i64, note: Option<&str>) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE punches SET note = ?1 WHERE id = ?2",
        params![note, punch_id],
    )?;

    if changed == 0 {
        return Err(AppError::PunchNotFound(punch_id));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Employees
// ---------------------------------------------------------------------------

pub fn map_employee_row(row: &Row) -> Result<Employee> {
    let hire_str: String = row.get("hire_date")?;
    let hire_date = NaiveDate::parse_from_str(&hire_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            Type::Text,
            Box::new(AppError::InvalidDate(hire_str.clone())),
        )
    })?;

    Ok(Employee {
        id: row.get("id")?,
        username: row.get("username")?,
        full_name: row.get("full_name")?,
        national_id: row.get("national_id")?,
        phone: row.get("phone")?,
        role: row.get("role")?,
        hire_date,
    })
}

pub fn insert_employee(conn: &Connection, emp: &Employee) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employees (username, full_name, national_id, phone, role, hire_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            emp.username,
            emp.full_name,
            emp.national_id,
            emp.phone,
            emp.role,
            emp.hire_date.format("%Y-%m-%d").to_string(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn employee_by_id(conn: &Connection, id: i64) -> AppResult<Option<Employee>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM employees WHERE id = ?1")?;

    let mut rows = stmt.query_map([id], map_employee_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

pub fn list_employees(conn: &Connection) -> AppResult<Vec<Employee>> {
    let mut stmt = conn.prepare("SELECT * FROM employees ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_employee_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Remove an employee. The punches FK cascades, so the employee's punch
/// history goes with it.
pub fn delete_employee(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM employees WHERE id = ?1", [id])?;

    if changed == 0 {
        return Err(AppError::EmployeeNotFound(id));
    }
    Ok(())
}
