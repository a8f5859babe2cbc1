use crate::core::report::ReportDocument;
use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::ui::messages::info;
use std::path::Path;

/// Render the assembled report document to a PDF file.
pub fn export_report_pdf(doc: &ReportDocument, path: &Path) -> AppResult<()> {
    info(format!("Exporting report to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.render_report(doc);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
