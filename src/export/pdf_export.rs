use crate::errors::{AppError, AppResult};
use crate::export::model::{entries_to_table, get_headers};
use crate::export::pdf::PdfManager;
use crate::export::{EntryExport, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

pub(crate) fn export_pdf(entries: &[EntryExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &get_headers(), &entries_to_table(entries));
    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF write: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
