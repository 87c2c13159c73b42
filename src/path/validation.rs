//! Path validation
//!
//! Pure validation functions; the shell layer owns the re-prompt loops so
//! these stay testable without simulating input streams.

use std::path::{Path, PathBuf};

use crate::error::PathError;

/// Characters that are never legal in a file name.
pub const FORBIDDEN_NAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Maximum file name length in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Resolves a raw directory string to an existing directory.
///
/// The `-` sentinel selects the configured default directory.
pub fn resolve_directory(raw: &str, default_dir: &Path) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    let candidate = if trimmed == "-" {
        default_dir.to_path_buf()
    } else {
        PathBuf::from(trimmed)
    };

    if candidate.is_dir() {
        Ok(candidate)
    } else {
        Err(PathError::InvalidDirectory(
            candidate.display().to_string(),
        ))
    }
}

/// Checks a candidate file name against the host filesystem rules.
///
/// Legal names are 1-255 characters with no forbidden characters and no
/// control codes (0x00-0x1F).
pub fn validate_file_name(name: &str) -> Result<(), PathError> {
    let length = name.chars().count();
    if length == 0 || length > MAX_NAME_LENGTH {
        return Err(PathError::InvalidFileName(name.to_string()));
    }

    if name
        .chars()
        .any(|c| FORBIDDEN_NAME_CHARS.contains(&c) || (c as u32) < 0x20)
    {
        return Err(PathError::InvalidFileName(name.to_string()));
    }

    Ok(())
}
