use serde::Serialize;

/// Automatic remark assigned to each reported day.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Annotation {
    /// Saturday or Sunday with punches, exempt from shift-length judgment.
    Compensated,
    /// Weekday without any punches.
    Absence,
    /// Less than the standard shift worked.
    IncompleteShift,
    /// More than the standard shift worked.
    Overtime,
    /// Exactly the standard shift worked.
    Ok,
}

impl Annotation {
    pub fn label(&self) -> &'static str {
        match self {
            Annotation::Compensated => "Compensated",
            Annotation::Absence => "Absence",
            Annotation::IncompleteShift => "Incomplete shift",
            Annotation::Overtime => "Overtime",
            Annotation::Ok => "OK",
        }
    }
}
