//! JSON record codec
//!
//! Persists Person records as one JSON array per file. Appends are
//! read-whole-array, push, rewrite-whole-file updates.

use log::info;
use std::fs;
use std::path::Path;

use crate::codec::{JSON_EXTENSION, Person, require_extension};
use crate::error::CodecError;

/// Reads the whole record collection from a `.json` file.
///
/// The file content must be a valid JSON array of objects. A freshly created
/// zero-byte file is not valid JSON and fails here; files are not
/// pre-initialized with `[]`.
pub fn read_people(path: &Path) -> Result<Vec<Person>, CodecError> {
    require_extension(path, JSON_EXTENSION)?;

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| CodecError::MalformedContent(e.to_string()))
}

/// Rewrites the whole record collection, pretty-printed.
///
/// Non-ASCII characters are written literally, not escaped.
pub fn write_people(path: &Path, people: &[Person]) -> Result<(), CodecError> {
    require_extension(path, JSON_EXTENSION)?;

    let rendered = serde_json::to_string_pretty(people)
        .map_err(|e| CodecError::MalformedContent(e.to_string()))?;
    fs::write(path, rendered)?;

    info!("Wrote {} records to {}", people.len(), path.display());
    Ok(())
}

/// Appends one record to the collection in a `.json` file.
///
/// The existing content is parsed before anything is written, so a malformed
/// file aborts the whole operation without touching it.
pub fn append_person(path: &Path, person: Person) -> Result<usize, CodecError> {
    let mut people = read_people(path)?;
    people.push(person);
    write_people(path, &people)?;
    Ok(people.len())
}
