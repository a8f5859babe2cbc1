use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// First and last day of the given month.
pub fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-{month:02}")))?;

    let mut d = first;
    while let Some(next) = d.succ_opt() {
        if next.month() != month {
            break;
        }
        d = next;
    }

    Ok((first, d))
}

/// Parse "YYYY-MM" into that month's date bounds.
pub fn parse_month(s: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (y, m) = s
        .split_once('-')
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
    let year: i32 = y.parse().map_err(|_| AppError::InvalidDate(s.to_string()))?;
    let month: u32 = m.parse().map_err(|_| AppError::InvalidDate(s.to_string()))?;

    month_bounds(year, month)
}

pub fn current_month_bounds() -> AppResult<(NaiveDate, NaiveDate)> {
    let now = today();
    month_bounds(now.year(), now.month())
}

pub fn weekday_name(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
