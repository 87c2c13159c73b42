//! Record serialization
//!
//! Serializes Person records to JSON collections and single-record XML
//! documents, selected purely by file suffix.

pub mod json;
pub mod person;
pub mod xml;

pub use person::Person;

use std::path::Path;

use crate::error::CodecError;

/// Expected suffix for JSON record files.
pub const JSON_EXTENSION: &str = "json";

/// Expected suffix for XML record files.
pub const XML_EXTENSION: &str = "xml";

/// Checks the file suffix against the expected extension.
///
/// This is a plain string comparison on the suffix, no content sniffing.
pub fn require_extension(path: &Path, expected: &'static str) -> Result<(), CodecError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext == expected => Ok(()),
        _ => Err(CodecError::WrongFileType {
            path: path.display().to_string(),
            expected,
        }),
    }
}
