//! ZIP archiving
//!
//! Packs a single file into a new archive created in the same directory.

use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::StorageError;

/// Archives the target file into `<stem>.zip` next to it.
///
/// The archive holds exactly one entry, stored under the target's base name
/// with default compression settings.
pub fn archive_file(path: &Path, stem: &str) -> Result<PathBuf, StorageError> {
    let dir = path
        .parent()
        .ok_or_else(|| StorageError::NotAFile(path.display().to_string()))?;
    let entry_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| StorageError::NotAFile(path.display().to_string()))?;

    let zip_path = dir.join(format!("{stem}.zip"));

    let output = fs::File::create(&zip_path)?;
    let mut writer = ZipWriter::new(output);
    writer.start_file(entry_name, SimpleFileOptions::default())?;

    let mut source = fs::File::open(path)?;
    io::copy(&mut source, &mut writer)?;
    writer.finish()?;

    info!("Archived {} into {}", path.display(), zip_path.display());
    Ok(zip_path)
}
