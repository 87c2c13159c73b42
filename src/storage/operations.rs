//! Storage operations
//!
//! Handles file system operations for menu actions including create, write,
//! read, and delete.

use log::info;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;

/// Creates an empty file, failing if the target already exists.
pub fn create_file(dir: &Path, name: &str) -> Result<PathBuf, StorageError> {
    let path = dir.join(name);

    match fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
    {
        Ok(_) => {
            info!("Created file {}", path.display());
            Ok(path)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            Err(StorageError::FileAlreadyExists(path.display().to_string()))
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            Err(StorageError::PermissionDenied(path.display().to_string()))
        }
        Err(e) => Err(StorageError::from(e)),
    }
}

/// Truncates the file and writes exactly the given text, UTF-8 encoded.
///
/// No trailing newline is appended.
pub fn write_line(path: &Path, text: &str) -> Result<(), StorageError> {
    fs::write(path, text)?;
    info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

/// Reads the file as UTF-8 text, returning its lines with trailing
/// whitespace trimmed.
pub fn read_lines(path: &Path) -> Result<Vec<String>, StorageError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => StorageError::FileNotFound(path.display().to_string()),
        ErrorKind::PermissionDenied => StorageError::PermissionDenied(path.display().to_string()),
        _ => StorageError::from(e),
    })?;

    Ok(content.lines().map(|line| line.trim_end().to_string()).collect())
}

/// Deletes the file.
pub fn delete_file(path: &Path) -> Result<(), StorageError> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!("Deleted file {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(StorageError::FileNotFound(path.display().to_string()))
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            Err(StorageError::PermissionDenied(path.display().to_string()))
        }
        Err(e) => Err(StorageError::from(e)),
    }
}
