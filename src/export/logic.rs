// src/export/logic.rs

use crate::core::report::ReportData;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::html::HtmlDocument;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{get_headers, weeks_to_table};
use crate::export::{ReportFormat, notify_export_success};
use crate::ui::messages::{info, warning};
use std::fs;
use std::path::Path;

pub const REPORT_TITLE: &str = "YTD Attendance Report";

/// Writes a built report to disk. Never touches the store.
pub struct ReportLogic;

impl ReportLogic {
    pub fn export(
        report: &ReportData,
        format: &ReportFormat,
        file: &Path,
        stylesheet: &str,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(file, force)?;

        if report.weeks.is_empty() {
            warning(format!(
                "No weeks seeded for {}-01..{}: the report table will be empty.",
                report.year, report.end_week
            ));
        }

        match format {
            ReportFormat::Html => export_html(report, file, stylesheet),
            ReportFormat::Json => export_json(report, file),
            ReportFormat::Csv => export_csv(report, file),
        }
    }
}

/// Render the report as a standalone HTML page.
pub fn render_html(report: &ReportData, stylesheet: &str) -> String {
    let mut doc = HtmlDocument::new(REPORT_TITLE, stylesheet);
    doc.h1(REPORT_TITLE)
        .p(&format!("YTD average: {}", report.average_label()))
        .p(&format!("Current week count: {}", report.current_week_count))
        .h2(&format!("Weeks {}-01 to {}", report.year, report.end_week))
        .table(&get_headers(), &weeks_to_table(&report.weeks));
    doc.render()
}

fn export_html(report: &ReportData, path: &Path, stylesheet: &str) -> AppResult<()> {
    info(format!("Exporting to HTML: {}", path.display()));
    fs::write(path, render_html(report, stylesheet))?;
    notify_export_success("HTML", path);
    Ok(())
}
