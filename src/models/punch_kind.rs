use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PunchKind {
    Entry,
    Exit,
}

impl PunchKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            PunchKind::Entry => "entry",
            PunchKind::Exit => "exit",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "entry" => Some(PunchKind::Entry),
            "exit" => Some(PunchKind::Exit),
            _ => None,
        }
    }

    /// Parse a user-facing filter value ("entry" / "exit", any case).
    pub fn parse_filter(s: &str) -> Option<Self> {
        Self::from_db_str(s.to_lowercase().as_str())
    }

    /// The kind that must follow this one in a valid punch sequence.
    pub fn toggle(&self) -> Self {
        match self {
            PunchKind::Entry => PunchKind::Exit,
            PunchKind::Exit => PunchKind::Entry,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PunchKind::Entry => "Entry",
            PunchKind::Exit => "Exit",
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, PunchKind::Entry)
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, PunchKind::Exit)
    }
}
