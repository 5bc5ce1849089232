use std::io::Write;
use std::path::PathBuf;

use packer::{FormatError, Packer};
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn resource(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join(name)
}

fn temp_input(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn packs_reference_file() {
    let output = Packer::default()
        .pack_file(resource("example_input"))
        .unwrap();
    assert_eq!(output, "4\n-\n2,7\n9,8");
}

#[test]
fn packs_large_file() {
    let output = Packer::default()
        .pack_file(resource("example_input_large"))
        .unwrap();
    let expected = std::fs::read_to_string(resource("example_output_large")).unwrap();

    assert_eq!(output.lines().count(), 200);
    assert_eq!(output, expected);
}

#[test]
fn repeated_runs_are_identical() {
    let packer = Packer::default();
    let first = packer.pack_file(resource("example_input_large")).unwrap();
    let second = packer.pack_file(resource("example_input_large")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn wrong_file_format_aborts() {
    let err = Packer::default()
        .pack_file(resource("example_input_wrong"))
        .unwrap_err();

    assert!(matches!(err, FormatError::MalformedLine(_)));
    assert_eq!(
        err.to_string(),
        "Line \"8 : (1,15.3;€34)\" format is incorrect"
    );
}

#[test]
fn empty_path_is_rejected() {
    let err = Packer::default().pack_file("").unwrap_err();
    assert_eq!(err.to_string(), "File path is empty");
}

#[test]
fn missing_file_is_rejected() {
    let err = Packer::default().pack_file("wrong_file_path").unwrap_err();
    assert!(matches!(err, FormatError::MissingFile(_)));
    assert!(err.to_string().starts_with("File doesn't exist"));
}

#[test]
fn windows_line_endings() {
    let file = temp_input("8 : (1,15.3,€34)\r\n81 : (4,72.30,€76) (7,70.30,€76)\r\n");
    let output = Packer::default().pack_file(file.path()).unwrap();
    assert_eq!(output, "-\n7");
}

#[test]
fn file_without_trailing_newline() {
    let file = temp_input("50 : (1,10.00,€10) (2,20.00,€20) (3,30.00,€30) (4,25.00,€25)");
    let output = Packer::default().pack_file(file.path()).unwrap();
    assert_eq!(output, "2,3");
}

#[test]
fn empty_file_yields_empty_output() {
    let file = temp_input("");
    let output = Packer::default().pack_file(file.path()).unwrap();
    assert_eq!(output, "");
}

#[test]
fn blank_line_is_malformed() {
    let file = temp_input("8 : (1,15.3,€34)\n\n8 : (1,15.3,€34)\n");
    let err = Packer::default().pack_file(file.path()).unwrap_err();
    assert_eq!(err.to_string(), "Line \"\" format is incorrect");
}

#[test]
fn limit_errors_surface_from_files() {
    let cases = [
        (
            "200 : (1,15.3,€34)",
            "Target package weight should not be more than 100",
        ),
        (
            "100 : (1,115.3,€34)",
            "Item weight should not be more than 100",
        ),
        (
            "100 : (1,15.3,€134)",
            "Item cost should not be more than 100",
        ),
        (
            "75 : (1) (2) (3) (4) (5) (6) (7) (8) (9) (10) (11) (12) (13) (14) (15) (16)",
            "Items in line should not be more than 15",
        ),
    ];

    for (line, message) in cases {
        let file = temp_input(&format!("8 : (1,15.3,€34)\n{}\n", line));
        let err = Packer::default().pack_file(file.path()).unwrap_err();
        assert_eq!(err.to_string(), message);
    }
}
