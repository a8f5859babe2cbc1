use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub username: String, // unique login name
    pub full_name: String,
    pub national_id: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub hire_date: NaiveDate,
}

impl Employee {
    /// Full name when present, username otherwise.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.username
        } else {
            &self.full_name
        }
    }
}
