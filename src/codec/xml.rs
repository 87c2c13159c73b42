//! XML record codec
//!
//! Persists exactly one Person per file as a declaration plus a single
//! `<Person>` root with three text children.

use log::info;
use std::fs;
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::codec::{Person, XML_EXTENSION, require_extension};
use crate::error::CodecError;

const ROOT_TAG: &str = "Person";
const FIRST_NAME_TAG: &str = "firstName";
const LAST_NAME_TAG: &str = "lastName";
const MIDDLE_NAME_TAG: &str = "middleName";

/// Overwrites the `.xml` file with a single Person document.
pub fn write_person(path: &Path, person: &Person) -> Result<(), CodecError> {
    require_extension(path, XML_EXTENSION)?;

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new(ROOT_TAG)))?;

    for (tag, value) in [
        (FIRST_NAME_TAG, &person.first_name),
        (LAST_NAME_TAG, &person.last_name),
        (MIDDLE_NAME_TAG, &person.middle_name),
    ] {
        writer.write_event(Event::Start(BytesStart::new(tag)))?;
        writer.write_event(Event::Text(BytesText::new(value)))?;
        writer.write_event(Event::End(BytesEnd::new(tag)))?;
    }

    writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;
    fs::write(path, writer.into_inner())?;

    info!("Wrote XML record to {}", path.display());
    Ok(())
}

/// Reads one Person from an `.xml` file by tag name.
///
/// Tags missing from the document leave the matching field empty.
pub fn read_person(path: &Path) -> Result<Person, CodecError> {
    require_extension(path, XML_EXTENSION)?;

    let content = fs::read_to_string(path)?;
    let mut reader = Reader::from_str(&content);
    reader.config_mut().trim_text(true);

    let mut person = Person::default();
    let mut current_tag: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                current_tag = Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Text(t)) => {
                let value = t
                    .unescape()
                    .map_err(|e| CodecError::MalformedContent(e.to_string()))?
                    .into_owned();
                match current_tag.as_deref() {
                    Some(FIRST_NAME_TAG) => person.first_name = value,
                    Some(LAST_NAME_TAG) => person.last_name = value,
                    Some(MIDDLE_NAME_TAG) => person.middle_name = value,
                    _ => {}
                }
            }
            Ok(Event::End(_)) => current_tag = None,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(CodecError::MalformedContent(e.to_string())),
        }
    }

    Ok(person)
}
