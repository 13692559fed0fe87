use crate::errors::AppResult;
use crate::export::archive::Archive;
use crate::store::{Store, log::dlog};
use crate::ui::messages::{success, warning};
use std::fs;
use std::io::{Write, stdin, stdout};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Write a backup of both store records to `dest_file`: a single
    /// archive JSON, optionally wrapped in a zip when `compress` is set.
    /// `assume_yes` skips the overwrite prompt (non-interactive runs).
    pub fn backup(store: &Store, dest_file: &str, compress: bool, assume_yes: bool) -> AppResult<()> {
        let dest = Path::new(dest_file);

        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        if dest.exists() && !assume_yes && !confirm_overwrite(dest)? {
            warning("Backup cancelled by user.");
            return Ok(());
        }

        let tasks = store.load_tasks()?;
        let settings = store.load_settings()?;
        let archive = Archive::snapshot(&tasks, &settings)?;
        let payload = serde_json::to_string_pretty(&archive)?;

        fs::write(dest, &payload)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            if compressed != dest.to_path_buf() {
                if let Err(e) = fs::remove_file(dest) {
                    eprintln!("Failed to remove uncompressed backup: {e}");
                }
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        let _ = dlog(
            store,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(())
    }
}

fn confirm_overwrite(dest: &Path) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", dest.display()));
    print!("Overwrite? [y/N]: ");
    stdout().flush().ok();

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = fs::File::open(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "backup.json".to_string());
    zip.start_file(name, options).map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
