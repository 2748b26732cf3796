use crate::errors::{AppError, AppResult};
use crate::export::{EntryExport, notify_export_success};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Pretty-printed JSON array of entries.
pub(crate) fn export_json(entries: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json = serde_json::to_string_pretty(entries)
        .map_err(|e| AppError::Export(format!("JSON serialization: {e}")))?;
    fs::write(path, json)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with a header row derived from the serde field names.
pub(crate) fn export_csv(entries: &[EntryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr =
        csv::Writer::from_path(path).map_err(|e| AppError::Export(format!("CSV open: {e}")))?;

    for entry in entries {
        wtr.serialize(entry)
            .map_err(|e| AppError::Export(format!("CSV write: {e}")))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
