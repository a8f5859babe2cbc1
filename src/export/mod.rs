mod fs_utils;
mod json_csv;
mod model;
mod pdf;
mod pdf_export;

pub use fs_utils::ensure_writable;
pub use json_csv::{export_csv, export_json};
pub use model::PunchRecord;
pub use pdf_export::export_report_pdf;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Completion message shared by all export formats.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// History export formats. Reports are always rendered as PDF.
#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
