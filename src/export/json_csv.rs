use crate::errors::{AppError, AppResult};
use crate::export::{PunchRecord, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export history rows as pretty-printed JSON.
pub fn export_json(records: &[PunchRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(records)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export history rows as CSV (header row included via serde).
pub fn export_csv(records: &[PunchRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for record in records {
        wtr.serialize(record)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
