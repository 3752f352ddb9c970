//! Tests for output writers and format dispatch.

#![cfg(all(feature = "csv-output", feature = "json-output"))]

use std::fs;

use tempfile::tempdir;

use wachat::core::output::{to_csv, to_json, to_jsonl, write_csv, write_json, write_jsonl};
use wachat::prelude::*;

const CHAT: &str = "\
06/03/2017, 00:45 - You created group \"Test\"
23/06/2018, 01:55 p.m. - Loris Bianchi: *one*
two; three
23/06/2018, 01:56 p.m. - Luke: see www.example.com
23/06/2018, 01:57 p.m. - Luke: <Media omitted>";

fn messages() -> Vec<Message> {
    parse_transcript(CHAT, &ParseOptions::days_first()).into_messages()
}

// =========================================================================
// CSV
// =========================================================================

#[test]
fn test_csv_default_columns() {
    let csv = to_csv(&messages(), &OutputConfig::new()).unwrap();
    let mut lines = csv.lines();

    assert_eq!(lines.next(), Some("Timestamp;Author;Message"));
    assert_eq!(
        lines.next(),
        Some(r#"2017-03-06 00:45:00;System;"You created group ""Test""""#)
    );
}

#[test]
fn test_csv_quotes_multiline_and_delimiters() {
    let csv = to_csv(&messages(), &OutputConfig::new().with_timestamps(false)).unwrap();

    assert!(csv.starts_with("Author;Message\n"));
    assert!(csv.contains("Loris Bianchi;\"*one*\ntwo; three\"\n"));
}

#[test]
fn test_csv_with_initials_and_html() {
    let config = OutputConfig::new()
        .with_timestamps(false)
        .with_initials(true)
        .with_htmlify(true);
    let csv = to_csv(&messages(), &config).unwrap();

    assert!(csv.starts_with("Author;Message;Initials\n"));
    assert!(csv.contains("Luke;Media omitted;L\n"));
    assert!(csv.contains("<b>one</b>"));
    assert!(csv.contains(";LB\n"));
}

#[test]
fn test_csv_roundtrip_through_reader() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.csv");
    write_csv(&messages(), path.to_str().unwrap(), &OutputConfig::new()).unwrap();

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .from_path(&path)
        .unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

    assert_eq!(rows.len(), 4);
    assert_eq!(&rows[1][1], "Loris Bianchi");
    assert_eq!(&rows[1][2], "*one*\ntwo; three");
}

// =========================================================================
// JSON / JSONL
// =========================================================================

#[test]
fn test_json_array() {
    let json = to_json(&messages(), &OutputConfig::new()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 4);
    assert_eq!(array[0]["author"], "System");
    assert_eq!(array[1]["timestamp"], "2018-06-23T13:55:00");
    assert_eq!(array[1]["message"], "*one*\ntwo; three");
    assert!(array[1].get("initials").is_none());
}

#[test]
fn test_json_without_timestamps() {
    let json = to_json(&messages(), &OutputConfig::new().with_timestamps(false)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value[0].get("timestamp").is_none());
}

#[test]
fn test_jsonl_one_object_per_line() {
    let config = OutputConfig::new().with_initials(true).with_htmlify(true);
    let jsonl = to_jsonl(&messages(), &config).unwrap();
    let lines: Vec<&str> = jsonl.lines().collect();

    assert_eq!(lines.len(), 4);
    let luke: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
    assert_eq!(luke["initials"], "L");
    assert_eq!(
        luke["message"],
        r#"see <a href="http://www.example.com" target="_blank" rel="noopener noreferrer">www.example.com</a>"#
    );
}

#[test]
fn test_file_writers() {
    let dir = tempdir().unwrap();
    let msgs = messages();
    let config = OutputConfig::new();

    let json_path = dir.path().join("out.json");
    write_json(&msgs, json_path.to_str().unwrap(), &config).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 4);

    let jsonl_path = dir.path().join("out.jsonl");
    write_jsonl(&msgs, jsonl_path.to_str().unwrap(), &config).unwrap();
    assert_eq!(fs::read_to_string(&jsonl_path).unwrap().lines().count(), 4);
}

#[test]
fn test_write_to_unwritable_path() {
    let err = write_csv(&messages(), "/nonexistent/dir/out.csv", &OutputConfig::new()).unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_empty_output() {
    let config = OutputConfig::new();
    assert_eq!(to_csv(&[], &config).unwrap(), "Timestamp;Author;Message\n");
    assert_eq!(to_json(&[], &config).unwrap().trim(), "[]");
    assert_eq!(to_jsonl(&[], &config).unwrap(), "");
}

// =========================================================================
// Format dispatch
// =========================================================================

#[test]
fn test_write_to_format_by_extension() {
    let dir = tempdir().unwrap();
    let msgs = messages();

    for name in ["out.csv", "out.json", "out.jsonl"] {
        let path = dir.path().join(name);
        let path = path.to_str().unwrap();
        let format = OutputFormat::from_path(path).unwrap();

        write_to_format(&msgs, path, format, &OutputConfig::new()).unwrap();
        let written = fs::read_to_string(path).unwrap();
        assert_eq!(
            written,
            to_format_string(&msgs, format, &OutputConfig::new()).unwrap(),
            "{name}"
        );
    }
}
