use crate::models::annotation::Annotation;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub weekday: &'static str,
    pub worked_minutes: i64,
    pub balance: String,
    pub annotation: Annotation,
}
