//! Clause files and interactive-style input.

use refute::{parse_clause_file, read_clauses, Outcome, RefuteError, SaturationConfig, SaturationState};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_file_round_trip_to_verdict() {
    let file = write_temp("P, Q\n\n~P, R\n~Q, R\n~R\n");
    let parsed = parse_clause_file(file.path()).unwrap();
    assert_eq!(parsed.clauses.len(), 4);

    let mut state = SaturationState::new(parsed.clauses, SaturationConfig::default(), parsed.interner);
    assert!(state.run().is_valid());
}

#[test]
fn test_file_error_reports_line_number() {
    let file = write_temp("P\n\n~P, 7\n");
    match parse_clause_file(file.path()) {
        Err(RefuteError::InvalidLiteral { line, token }) => {
            assert_eq!(line, 3);
            assert_eq!(token, "7");
        }
        other => panic!("expected invalid literal, got {:?}", other.map(|p| p.clauses)),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = parse_clause_file(dir.path().join("absent.txt"));
    assert!(matches!(result, Err(RefuteError::IoError(_))));
}

#[test]
fn test_read_counted_clauses() {
    let mut input = Cursor::new("p\n~p\nextra\n");
    let parsed = read_clauses(&mut input, 2).unwrap();
    assert_eq!(parsed.clauses.len(), 2);

    let mut state = SaturationState::new(parsed.clauses, SaturationConfig::default(), parsed.interner);
    assert!(matches!(state.run(), Outcome::Valid(_)));
}

#[test]
fn test_read_short_input_fails() {
    let mut input = Cursor::new("P\n");
    assert!(matches!(
        read_clauses(&mut input, 3),
        Err(RefuteError::InvalidInput(_))
    ));
}
