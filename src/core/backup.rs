use crate::config::Config;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally zipping the copy.
    /// An existing destination is only overwritten after confirmation,
    /// unless `force` is set.
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool, force: bool) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        if !src.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        let dest = expand_tilde(dest_file);
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        if dest.exists() && !force && !overwrite_allowed(&dest)? {
            messages::warning("Backup cancelled by user.");
            return Ok(());
        }

        fs::copy(src, &dest)?;
        messages::success(format!("Backup created: {}", dest.display()));

        let mut final_path = dest.clone();
        let mut note = "Backup created";

        if compress {
            let zip_path = zip_copy(&dest)?;
            messages::success(format!("Compressed: {}", zip_path.display()));

            if let Err(e) = fs::remove_file(&dest) {
                messages::warning(format!(
                    "Could not remove uncompressed copy {}: {}",
                    dest.display(),
                    e
                ));
            }

            final_path = zip_path;
            note = "Backup created and compressed";
        }

        let conn = Connection::open(src)?;
        ttlog(&conn, "backup", &final_path.display().to_string(), note)?;

        Ok(())
    }
}

fn overwrite_allowed(dest: &Path) -> AppResult<bool> {
    print!("File '{}' already exists. Overwrite? [y/N]: ", dest.display());
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}

/// Write a deflate-compressed zip next to `file` and return its path.
fn zip_copy(file: &Path) -> AppResult<PathBuf> {
    let zip_path = file.with_extension("zip");

    let mut payload = Vec::new();
    fs::File::open(file)?.read_to_end(&mut payload)?;

    let entry_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "backup.db".to_string());

    let out = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(out);
    let opts: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    zip.start_file(entry_name, opts).map_err(io::Error::other)?;
    zip.write_all(&payload)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(zip_path)
}
