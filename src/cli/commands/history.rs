use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::normalize::utc_window;
use crate::db::pool::DbPool;
use crate::db::queries::{employee_by_id, list_employees, query_punches};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, PunchRecord, ensure_writable, export_csv, export_json};
use crate::models::punch_kind::PunchKind;
use crate::utils::date::parse_date;
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;
use chrono::NaiveDate;
use std::collections::HashMap;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History {
        employee,
        from,
        to,
        kind,
        format,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let offset = cfg.offset();

        if let Some(id) = employee {
            employee_by_id(&pool.conn, *id)?.ok_or(AppError::EmployeeNotFound(*id))?;
        }

        let kind_filter = match kind {
            Some(raw) => Some(
                PunchKind::parse_filter(raw).ok_or_else(|| AppError::InvalidKind(raw.clone()))?,
            ),
            None => None,
        };

        let window = match (from, to) {
            (None, None) => None,
            (f, t) => {
                // open ends fall back to dates far outside any punch history
                let lo = match f {
                    Some(s) => parse_date(s)?,
                    None => NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
                };
                let hi = match t {
                    Some(s) => parse_date(s)?,
                    None => NaiveDate::from_ymd_opt(9999, 12, 30).unwrap(),
                };
                Some(utc_window(lo, hi, offset))
            }
        };

        let punches = query_punches(&pool.conn, *employee, window, kind_filter, false)?;

        let names: HashMap<i64, String> = list_employees(&pool.conn)?
            .into_iter()
            .map(|e| (e.id, e.display_name().to_string()))
            .collect();

        let records: Vec<PunchRecord> = punches
            .iter()
            .map(|p| {
                let name = names
                    .get(&p.employee_id)
                    .map(String::as_str)
                    .unwrap_or("(removed)");
                PunchRecord::from_punch(p, name, offset)
            })
            .collect();

        if let Some(out) = file {
            let path = expand_tilde(out);
            ensure_writable(&path, *force)?;

            match format.clone().unwrap_or(ExportFormat::Csv) {
                ExportFormat::Csv => export_csv(&records, &path)?,
                ExportFormat::Json => export_json(&records, &path)?,
            }
            return Ok(());
        }

        if records.is_empty() {
            println!("No punch records found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            "ID", "Employee", "Kind", "Date", "Time", "Source", "Note",
        ]);
        for r in &records {
            table.add_row(vec![
                r.id.to_string(),
                r.employee.clone(),
                r.kind.clone(),
                r.date.clone(),
                r.time.clone(),
                r.source.clone(),
                r.note.clone(),
            ]);
        }

        print!("{}", table.render());
        println!("\n{} records.", records.len());
    }

    Ok(())
}
