//! JSON Lines (JSONL) output writer.
//!
//! One object per line, so consumers can process a large transcript one
//! message at a time.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::Message;
use crate::core::models::{OutputConfig, OutputRecord};
use crate::error::Result;

use super::json_writer::TIMESTAMP_FORMAT;

fn write_lines<W: Write>(mut out: W, messages: &[Message], config: &OutputConfig) -> Result<()> {
    for msg in messages {
        let record = OutputRecord::from_message(msg, config, TIMESTAMP_FORMAT);
        serde_json::to_writer(&mut out, &record)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}

/// Writes messages to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2018-06-23T13:55:00","author":"Loris","message":"one\ntwo"}
/// {"timestamp":"2018-06-23T13:56:00","author":"Luke","message":"Hey!"}
/// ```
pub fn write_jsonl(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let writer = BufWriter::new(File::create(output_path)?);
    write_lines(writer, messages, config)
}

/// Converts messages to a JSONL string.
pub fn to_jsonl(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(&mut buffer, messages, config)?;
    // serde_json only emits UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
