pub mod annotation;
pub mod day_summary;
pub mod employee;
pub mod punch;
pub mod punch_kind;
