use log::{error, info};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::codec::{self, Person, json, xml};
use crate::error::StorageError;
use crate::menu::parser::{FileAction, MenuResult, TopChoice};
use crate::path::validation::{resolve_directory, validate_file_name};
use crate::shell::prompt::Prompter;
use crate::storage::{archive, operations};
use crate::volume::report;

// Handle a single top-level menu choice
pub fn handle_top_choice<R: BufRead, W: Write>(
    choice: TopChoice,
    prompter: &mut Prompter<R, W>,
    default_dir: &Path,
) -> io::Result<MenuResult> {
    match choice {
        TopChoice::CreateFile => handle_create_file(prompter, default_dir)?,
        TopChoice::ListVolumes => handle_volume_report(prompter)?,
        TopChoice::SelectFile => handle_select_file(prompter, default_dir)?,
        TopChoice::Exit => return Ok(MenuResult::Exit),
        // Unrecognized choices fall through to the enclosing loop
        TopChoice::Unknown(choice) => info!("Ignoring unrecognized menu choice {}", choice),
    }
    Ok(MenuResult::Continue)
}

// Handle a single file action for the selected file
pub fn handle_file_action<R: BufRead, W: Write>(
    action: FileAction,
    path: &Path,
    prompter: &mut Prompter<R, W>,
) -> io::Result<()> {
    match action {
        FileAction::WriteLine => handle_write_line(path, prompter),
        FileAction::PrintFile => handle_print_file(path, prompter),
        FileAction::Delete => handle_delete(path, prompter),
        FileAction::WriteJson => handle_write_json(path, prompter),
        FileAction::PrintJson => handle_print_json(path, prompter),
        FileAction::WriteXml => handle_write_xml(path, prompter),
        FileAction::PrintXml => handle_print_xml(path, prompter),
        FileAction::Archive => handle_archive(path, prompter),
        FileAction::Unknown(choice) => {
            info!("Ignoring unrecognized file action {}", choice);
            Ok(())
        }
    }
}

// Menu handler for file creation
fn handle_create_file<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    default_dir: &Path,
) -> io::Result<()> {
    let dir = prompt_directory(prompter, default_dir)?;

    loop {
        let name = prompt_file_name(prompter)?;
        match operations::create_file(&dir, &name) {
            Ok(_) => {
                prompter.say("File created")?;
                return Ok(());
            }
            Err(StorageError::FileAlreadyExists(_)) => {
                prompter.say(&format!("File {} already exists", name))?;
            }
            Err(e) => {
                error!("File creation failed: {}", e);
                prompter.say(&format!("Failed to create file: {}", e))?;
                return Ok(());
            }
        }
    }
}

// Menu handler for volume info
fn handle_volume_report<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<()> {
    for volume in report::list_volumes() {
        prompter.say(&format!("Device: {}", volume.device))?;
        prompter.say(&format!("Mount point: {}", volume.mount_point.display()))?;
        prompter.say(&format!("File system: {}", volume.fs_type))?;
        match volume.total_mb {
            Some(mb) => prompter.say(&format!("Size: {}mb", mb))?,
            None => prompter.say("Size: unknown")?,
        }
        prompter.say("")?;
    }
    Ok(())
}

// Menu handler for file selection and the file action screen
fn handle_select_file<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    default_dir: &Path,
) -> io::Result<()> {
    let dir = prompt_directory(prompter, default_dir)?;

    let mut name = prompt_file_name(prompter)?;
    while !dir.join(&name).exists() {
        prompter.say(&format!("File {} does not exist", name))?;
        name = prompt_file_name(prompter)?;
    }
    let path = dir.join(&name);

    print_file_actions(prompter)?;
    let choice = prompter.ask_choice()?;
    handle_file_action(FileAction::from(choice), &path, prompter)
}

// File action handler for writing a line
fn handle_write_line<R: BufRead, W: Write>(
    path: &Path,
    prompter: &mut Prompter<R, W>,
) -> io::Result<()> {
    let text = prompter.ask("Line: ")?;
    match operations::write_line(path, &text) {
        Ok(()) => prompter.say("Line written")?,
        Err(e) => {
            error!("Write failed for {}: {}", path.display(), e);
            prompter.say(&format!("Failed to write file: {}", e))?;
        }
    }
    Ok(())
}

// File action handler for printing the file
fn handle_print_file<R: BufRead, W: Write>(
    path: &Path,
    prompter: &mut Prompter<R, W>,
) -> io::Result<()> {
    match operations::read_lines(path) {
        Ok(lines) => {
            for line in lines {
                prompter.say(&line)?;
            }
        }
        Err(e) => {
            error!("Read failed for {}: {}", path.display(), e);
            prompter.say(&format!("Failed to read file: {}", e))?;
        }
    }
    Ok(())
}

// File action handler for deletion
fn handle_delete<R: BufRead, W: Write>(
    path: &Path,
    prompter: &mut Prompter<R, W>,
) -> io::Result<()> {
    match operations::delete_file(path) {
        Ok(()) => prompter.say("File deleted")?,
        Err(e) => {
            error!("Delete failed for {}: {}", path.display(), e);
            prompter.say(&format!("Failed to delete file: {}", e))?;
        }
    }
    Ok(())
}

// File action handler for appending a JSON record
fn handle_write_json<R: BufRead, W: Write>(
    path: &Path,
    prompter: &mut Prompter<R, W>,
) -> io::Result<()> {
    // Check the suffix before prompting for fields
    if let Err(e) = codec::require_extension(path, codec::JSON_EXTENSION) {
        prompter.say(&e.to_string())?;
        return Ok(());
    }

    let person = prompt_person(prompter)?;
    match json::append_person(path, person) {
        Ok(count) => {
            info!("JSON file {} now holds {} records", path.display(), count);
            prompter.say("Records written")?;
        }
        Err(e) => {
            error!("JSON append failed for {}: {}", path.display(), e);
            prompter.say(&format!("Failed to write records: {}", e))?;
        }
    }
    Ok(())
}

// File action handler for printing a JSON record file
fn handle_print_json<R: BufRead, W: Write>(
    path: &Path,
    prompter: &mut Prompter<R, W>,
) -> io::Result<()> {
    match json::read_people(path) {
        Ok(people) => {
            for person in people {
                say_person(prompter, &person)?;
                prompter.say("")?;
            }
        }
        Err(e) => {
            error!("JSON read failed for {}: {}", path.display(), e);
            prompter.say(&format!("Failed to read records: {}", e))?;
        }
    }
    Ok(())
}

// File action handler for writing an XML record
fn handle_write_xml<R: BufRead, W: Write>(
    path: &Path,
    prompter: &mut Prompter<R, W>,
) -> io::Result<()> {
    if let Err(e) = codec::require_extension(path, codec::XML_EXTENSION) {
        prompter.say(&e.to_string())?;
        return Ok(());
    }

    let person = prompt_person(prompter)?;
    match xml::write_person(path, &person) {
        Ok(()) => prompter.say("Records written")?,
        Err(e) => {
            error!("XML write failed for {}: {}", path.display(), e);
            prompter.say(&format!("Failed to write records: {}", e))?;
        }
    }
    Ok(())
}

// File action handler for printing an XML record file
fn handle_print_xml<R: BufRead, W: Write>(
    path: &Path,
    prompter: &mut Prompter<R, W>,
) -> io::Result<()> {
    match xml::read_person(path) {
        Ok(person) => say_person(prompter, &person)?,
        Err(e) => {
            error!("XML read failed for {}: {}", path.display(), e);
            prompter.say(&format!("Failed to read record: {}", e))?;
        }
    }
    Ok(())
}

// File action handler for ZIP archiving
fn handle_archive<R: BufRead, W: Write>(
    path: &Path,
    prompter: &mut Prompter<R, W>,
) -> io::Result<()> {
    let stem = prompter.ask("Archive name: ")?;
    match archive::archive_file(path, &stem) {
        Ok(_) => prompter.say("File archived")?,
        Err(e) => {
            error!("Archive failed for {}: {}", path.display(), e);
            prompter.say(&format!("Failed to archive file: {}", e))?;
        }
    }
    Ok(())
}

/// Prompts for a directory until an existing one is given.
fn prompt_directory<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    default_dir: &Path,
) -> io::Result<PathBuf> {
    let invite = format!(
        "File location (enter - for the default, currently {}): ",
        default_dir.display()
    );
    loop {
        let raw = prompter.ask(&invite)?;
        match resolve_directory(&raw, default_dir) {
            Ok(dir) => return Ok(dir),
            Err(e) => prompter.say(&e.to_string())?,
        }
    }
}

/// Prompts for a file name until a legal one is given.
fn prompt_file_name<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<String> {
    loop {
        let name = prompter.ask("File name: ")?;
        match validate_file_name(&name) {
            Ok(()) => return Ok(name),
            Err(e) => prompter.say(&e.to_string())?,
        }
    }
}

/// Prompts for the three Person fields.
fn prompt_person<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<Person> {
    let first_name = prompter.ask("First name: ")?;
    let last_name = prompter.ask("Last name: ")?;
    let middle_name = prompter.ask("Middle name: ")?;
    Ok(Person::new(&first_name, &last_name, &middle_name))
}

fn say_person<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    person: &Person,
) -> io::Result<()> {
    prompter.say(&format!("FirstName: {}", person.first_name))?;
    prompter.say(&format!("LastName: {}", person.last_name))?;
    prompter.say(&format!("MiddleName: {}", person.middle_name))
}

fn print_file_actions<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<()> {
    prompter.say("Choose an action")?;
    prompter.say("Write a line to the file (1)")?;
    prompter.say("Print the file (2)")?;
    prompter.say("Delete the file (3)")?;
    prompter.say("Write a Person record as JSON (4)")?;
    prompter.say("Print the JSON file (5)")?;
    prompter.say("Write a Person record as XML (6)")?;
    prompter.say("Print the XML file (7)")?;
    prompter.say("Archive the file as ZIP (8)")
}
