use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::EntryExport;
use crate::ui::messages::warning;
use crate::utils::date::{month_name, period_bounds};

use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// High-level export driver.
pub struct ExportLogic;

impl ExportLogic {
    /// Export timesheet entries.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"`, or an expression such as:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `start:end` with any of the above on both sides
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(period_bounds(r).map_err(AppError::InvalidDate)?),
        };

        let entries = load_entries(pool, date_bounds)?;

        if entries.is_empty() {
            warning("⚠️  No entries found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&entries, path)?,
            ExportFormat::Json => export_json(&entries, path)?,
            ExportFormat::Xlsx => export_xlsx(&entries, path)?,
            ExportFormat::Pdf => {
                let title = build_pdf_title(range);
                export_pdf(&entries, path, &title)?
            }
        }

        Ok(())
    }
}

/// PDF title reflecting the selected period.
fn build_pdf_title(period: &Option<String>) -> String {
    let Some(p) = period.as_ref() else {
        return "Timesheet entries".to_string();
    };

    match p.len() {
        4 => {
            // YYYY
            format!("Timesheet entries for year {}", p)
        }

        7 => {
            // YYYY-MM
            let parts: Vec<&str> = p.split('-').collect();
            match (parts.as_slice(), parts.get(1).and_then(|m| m.parse::<u32>().ok())) {
                ([year, _], Some(month)) => {
                    format!("Timesheet entries for {} {}", month_name(month), year)
                }
                _ => "Timesheet entries".to_string(),
            }
        }

        10 => {
            // YYYY-MM-DD
            format!("Timesheet entries for date {}", p)
        }

        _ => {
            // start:end
            if let Some((start, end)) = p.split_once(':') {
                format!("Timesheet entries from {} to {}", start.trim(), end.trim())
            } else {
                "Timesheet entries".to_string()
            }
        }
    }
}

/// Load entries in export order, optionally constrained to date bounds.
fn load_entries(
    pool: &mut DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<EntryExport>> {
    let mut rows = queries::load_all_entries(&pool.conn)?;

    if let Some((start, end)) = bounds {
        let start = start.format("%Y-%m-%d").to_string();
        let end = end.format("%Y-%m-%d").to_string();
        rows.retain(|r| r.date >= start && r.date <= end);
    }

    // Oldest first in the output file
    rows.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

    Ok(rows.iter().map(EntryExport::from).collect())
}
