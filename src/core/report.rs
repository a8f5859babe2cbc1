//! Attendance report assembly.
//!
//! Builds a plain document model (legend, table rows, footer) that the
//! export layer renders; nothing here depends on the output format.

use crate::config::Config;
use crate::core::aggregate::group_by_day;
use crate::core::{classify, shift};
use crate::models::day_summary::DaySummary;
use crate::models::employee::Employee;
use crate::models::punch::Punch;
use crate::utils::date::weekday_name;
use crate::utils::time::format_minutes;
use chrono::NaiveDate;

/// Up to this many Entry/Exit column pairs are rendered per day; punches
/// beyond that are counted in the totals but get no column.
pub const MAX_PAIR_COLUMNS: usize = 4;

pub const REPORT_HEADERS: [&str; 13] = [
    "Date", "Weekday", "In 1", "Out 1", "In 2", "Out 2", "In 3", "Out 3", "In 4", "Out 4",
    "Total", "Balance", "Remarks",
];

#[derive(Debug, Clone)]
pub enum ReportBody {
    Table(Vec<Vec<String>>),
    Notice(String),
}

#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub title: String,
    pub legend: Vec<String>,
    pub body: ReportBody,
    pub footer: Vec<String>,
}

/// Summarize one day of punches.
pub fn summarize_day(
    date: NaiveDate,
    day_punches: &[Punch],
    shift_minutes: i64,
) -> DaySummary {
    let worked = shift::worked_minutes(day_punches);

    DaySummary {
        date,
        weekday: weekday_name(date),
        worked_minutes: worked,
        balance: classify::balance(worked, shift_minutes),
        annotation: classify::classify(date, day_punches, worked, shift_minutes),
    }
}

/// Assemble the report for one employee over an inclusive local date range.
///
/// Rows are built only from days that actually have punches; an empty day
/// produces no row. When the whole range is empty, the document carries a
/// notice instead of a table.
pub fn build_report(
    employee: &Employee,
    punches: &[Punch],
    start: NaiveDate,
    end: NaiveDate,
    cfg: &Config,
) -> ReportDocument {
    let offset = cfg.offset();
    let shift_minutes = cfg.shift_minutes();
    let shift_str = format_minutes(shift_minutes);

    let title = format!(
        "Attendance report: {} ({} to {})",
        employee.display_name(),
        start.format("%d/%m/%Y"),
        end.format("%d/%m/%Y"),
    );

    let legend = vec![
        "Legend:".to_string(),
        "Compensated = Saturday/Sunday with punches".to_string(),
        "Absence = weekday without punches".to_string(),
        format!("Incomplete shift = less than {shift_str} worked"),
        format!("Overtime = more than {shift_str} worked"),
        format!("OK = full shift ({shift_str})"),
        format!("All times in UTC{}", cfg.business_offset),
    ];

    if punches.is_empty() {
        return ReportDocument {
            title,
            legend,
            body: ReportBody::Notice(
                "No punch records found in the selected period.".to_string(),
            ),
            footer: Vec::new(),
        };
    }

    let days = group_by_day(punches, offset);

    let mut rows = Vec::with_capacity(days.len());
    for (date, day_punches) in &days {
        let summary = summarize_day(*date, day_punches, shift_minutes);

        let mut row = Vec::with_capacity(REPORT_HEADERS.len());
        row.push(date.format("%d/%m/%Y").to_string());
        row.push(summary.weekday.to_string());
        row.extend(pair_columns(day_punches, offset));
        row.push(format_minutes(summary.worked_minutes));
        row.push(summary.balance.clone());
        row.push(summary.annotation.label().to_string());

        rows.push(row);
    }

    let footer = vec![
        "Period summary:".to_string(),
        format!("Total punches: {}", punches.len()),
        format!("Days with punches: {}", days.len()),
        format!("Standard shift: {shift_str} daily"),
        format!("Timezone applied: UTC{}", cfg.business_offset),
    ];

    ReportDocument {
        title,
        legend,
        body: ReportBody::Table(rows),
        footer,
    }
}

/// Fill the In/Out column slots in chronological order. Entries and exits
/// advance independent counters; anything past the fourth of its kind is
/// dropped from the columns.
fn pair_columns(day_punches: &[Punch], offset: chrono::FixedOffset) -> Vec<String> {
    let mut slots = vec!["-".to_string(); MAX_PAIR_COLUMNS * 2];

    let mut sorted = day_punches.to_vec();
    sorted.sort_by_key(|p| p.timestamp);

    let mut entries = 0;
    let mut exits = 0;

    for punch in &sorted {
        let time = punch.local_time_str(offset);
        if punch.kind.is_entry() && entries < MAX_PAIR_COLUMNS {
            slots[entries * 2] = time;
            entries += 1;
        } else if punch.kind.is_exit() && exits < MAX_PAIR_COLUMNS {
            slots[exits * 2 + 1] = time;
            exits += 1;
        }
    }

    slots
}
