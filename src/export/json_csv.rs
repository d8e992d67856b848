// src/export/json_csv.rs

use crate::core::report::ReportData;
use crate::errors::{AppError, AppResult};
use crate::export::model::{CSV_HEADERS, WeekRow};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export the report as pretty-printed JSON.
pub(crate) fn export_json(report: &ReportData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(report)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export the weekly rows as CSV. The header is written even without rows.
pub(crate) fn export_csv(report: &ReportData, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    wtr.write_record(CSV_HEADERS)
        .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;

    for week in &report.weeks {
        wtr.serialize(WeekRow::from(week))
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
