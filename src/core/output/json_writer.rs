//! JSON output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::Message;
use crate::core::models::{OutputConfig, OutputRecord};
use crate::error::Result;

pub(super) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn records(messages: &[Message], config: &OutputConfig) -> Vec<OutputRecord> {
    messages
        .iter()
        .map(|m| OutputRecord::from_message(m, config, TIMESTAMP_FORMAT))
        .collect()
}

/// Writes messages to JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2018-06-23T13:55:00", "author": "Loris", "message": "one\ntwo"},
///   {"timestamp": "2018-06-23T13:56:00", "author": "Luke", "message": "Hey!"}
/// ]
/// ```
pub fn write_json(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(&mut writer, &records(messages, config))?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to JSON string as an array.
///
/// Same format as [`write_json`], but returns a String instead of writing to
/// file.
pub fn to_json(messages: &[Message], config: &OutputConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&records(messages, config))?)
}
