use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::normalize::utc_window;
use crate::core::report::build_report;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{employee_by_id, query_punches};
use crate::errors::{AppError, AppResult};
use crate::export::{ensure_writable, export_report_pdf};
use crate::ui::messages::info;
use crate::utils::date::{current_month_bounds, parse_date, parse_month};
use crate::utils::path::expand_tilde;
use chrono::NaiveDate;

fn resolve_range(
    month: &Option<String>,
    from: &Option<String>,
    to: &Option<String>,
) -> AppResult<(NaiveDate, NaiveDate)> {
    if month.is_some() && (from.is_some() || to.is_some()) {
        return Err(AppError::Other(
            "use either --month or --from/--to, not both".to_string(),
        ));
    }

    if let Some(m) = month {
        return parse_month(m);
    }

    match (from, to) {
        (Some(f), Some(t)) => {
            let start = parse_date(f)?;
            let end = parse_date(t)?;
            if end < start {
                return Err(AppError::InvalidDate(format!("{t} is before {f}")));
            }
            Ok((start, end))
        }
        (None, None) => current_month_bounds(),
        _ => Err(AppError::Other(
            "--from and --to must be given together".to_string(),
        )),
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        employee,
        month,
        from,
        to,
        file,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;

        let emp = employee_by_id(&pool.conn, *employee)?
            .ok_or(AppError::EmployeeNotFound(*employee))?;

        let (start, end) = resolve_range(month, from, to)?;
        info(format!(
            "Building report for {} from {} to {}",
            emp.display_name(),
            start,
            end
        ));

        let window = utc_window(start, end, cfg.offset());
        let punches = query_punches(&pool.conn, Some(*employee), Some(window), None, true)?;

        let doc = build_report(&emp, &punches, start, end, cfg);

        let path = expand_tilde(file);
        ensure_writable(&path, *force)?;
        export_report_pdf(&doc, &path)?;

        ttlog(
            &pool.conn,
            "report",
            &emp.username,
            &format!("Report generated for {start} to {end}"),
        )?;
    }

    Ok(())
}
