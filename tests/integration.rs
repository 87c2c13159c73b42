//! End-to-end shell tests
//!
//! Drives the interactive menu loop with scripted input over in-memory
//! buffers, against a temporary directory as the default path.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use tempfile::TempDir;

use rax_file_manager::Shell;

// Runs one scripted session and returns the full transcript
fn run_session(script: &str, default_dir: &Path) -> String {
    let mut output = Vec::new();
    let mut shell = Shell::new(
        Cursor::new(script.to_string()),
        &mut output,
        default_dir.to_path_buf(),
    );
    shell.run().expect("session failed");
    String::from_utf8(output).expect("transcript is not UTF-8")
}

#[test]
fn test_create_write_and_print_file() {
    let dir = TempDir::new().unwrap();

    // create notes.txt, write a line to it, then print it back
    let script = "1\n-\nnotes.txt\n3\n-\nnotes.txt\n1\nhello\n3\n-\nnotes.txt\n2\n0\n";
    let transcript = run_session(script, dir.path());

    let path = dir.path().join("notes.txt");
    assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    assert!(transcript.contains("File created"));
    assert!(transcript.contains("Line written"));
    assert!(transcript.contains("hello"));
}

#[test]
fn test_create_rejects_existing_file_until_new_name() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("taken.txt"), "").unwrap();

    let script = "1\n-\ntaken.txt\nfree.txt\n0\n";
    let transcript = run_session(script, dir.path());

    assert!(transcript.contains("File taken.txt already exists"));
    assert!(dir.path().join("free.txt").is_file());
}

#[test]
fn test_illegal_file_name_reprompts() {
    let dir = TempDir::new().unwrap();

    let script = "1\n-\nbad|name\nnotes.txt\n0\n";
    let transcript = run_session(script, dir.path());

    assert!(transcript.contains("Invalid file name: bad|name"));
    assert!(dir.path().join("notes.txt").is_file());
}

#[test]
fn test_invalid_directory_reprompts() {
    let dir = TempDir::new().unwrap();

    let script = format!(
        "1\n/definitely/not/a/real/dir\n{}\nnotes.txt\n0\n",
        dir.path().display()
    );
    let transcript = run_session(&script, dir.path());

    assert!(transcript.contains("Invalid directory: /definitely/not/a/real/dir"));
    assert!(dir.path().join("notes.txt").is_file());
}

#[test]
fn test_select_missing_file_reprompts_name() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("real.txt"), "content").unwrap();

    let script = "3\n-\nghost.txt\nreal.txt\n2\n0\n";
    let transcript = run_session(script, dir.path());

    assert!(transcript.contains("File ghost.txt does not exist"));
    assert!(transcript.contains("content"));
}

#[test]
fn test_json_record_round_trip_via_menu() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("people.json"), "[]").unwrap();

    let script = "3\n-\npeople.json\n4\nAda\nLovelace\nByron\n3\n-\npeople.json\n5\n0\n";
    let transcript = run_session(script, dir.path());

    assert!(transcript.contains("Records written"));
    assert!(transcript.contains("FirstName: Ada"));
    assert!(transcript.contains("LastName: Lovelace"));
    assert!(transcript.contains("MiddleName: Byron"));
}

#[test]
fn test_json_write_on_wrong_extension_aborts_before_prompts() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "original").unwrap();

    // No Person fields in the script: the extension check must abort first
    let script = "3\n-\nnotes.txt\n4\n0\n";
    let transcript = run_session(script, dir.path());

    assert!(transcript.contains("is not a .json file"));
    assert_eq!(
        fs::read_to_string(dir.path().join("notes.txt")).unwrap(),
        "original"
    );
}

#[test]
fn test_json_append_on_empty_file_reports_malformed_content() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("people.json"), "").unwrap();

    let script = "3\n-\npeople.json\n4\nAda\nLovelace\nByron\n0\n";
    let transcript = run_session(script, dir.path());

    assert!(transcript.contains("Failed to write records"));
    assert_eq!(
        fs::read_to_string(dir.path().join("people.json")).unwrap(),
        ""
    );
}

#[test]
fn test_xml_record_round_trip_via_menu() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("person.xml"), "").unwrap();

    let script = "3\n-\nperson.xml\n6\nGrace\nHopper\nBrewster\n3\n-\nperson.xml\n7\n0\n";
    let transcript = run_session(script, dir.path());

    assert!(transcript.contains("Records written"));
    assert!(transcript.contains("FirstName: Grace"));
    assert!(transcript.contains("LastName: Hopper"));
    assert!(transcript.contains("MiddleName: Brewster"));
}

#[test]
fn test_delete_file_via_menu() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("doomed.txt");
    fs::write(&path, "bye").unwrap();

    let script = "3\n-\ndoomed.txt\n3\n0\n";
    let transcript = run_session(script, dir.path());

    assert!(transcript.contains("File deleted"));
    assert!(!path.exists());
}

#[test]
fn test_archive_file_via_menu() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "archived content").unwrap();

    let script = "3\n-\nnotes.txt\n8\nbackup\n0\n";
    let transcript = run_session(script, dir.path());

    assert!(transcript.contains("File archived"));
    assert!(dir.path().join("backup.zip").is_file());
}

#[test]
fn test_unrecognized_choices_are_ignored() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), "").unwrap();

    // Unknown top choice, then an unknown file action, then exit
    let script = "42\n3\n-\nnotes.txt\n42\n0\n";
    let transcript = run_session(script, dir.path());

    assert!(!transcript.contains("Failed"));
    // The loop came back around to the top menu both times
    assert!(transcript.matches("Create file (1)").count() >= 3);
}

#[test]
fn test_non_numeric_choice_reprompts() {
    let dir = TempDir::new().unwrap();

    let script = "exit\n0\n";
    let transcript = run_session(script, dir.path());

    assert!(transcript.contains("Enter a number"));
}

#[test]
fn test_end_of_input_terminates_cleanly() {
    let dir = TempDir::new().unwrap();
    let transcript = run_session("", dir.path());
    assert!(transcript.contains("Exit (0)"));
}
