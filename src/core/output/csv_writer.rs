//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::Message;
use crate::core::models::{OutputConfig, OutputRecord};
use crate::error::{Result, WachatError};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes messages to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Timestamp` (unless disabled), `Author`, `Message`, then
///   `Initials` if enabled
/// - Encoding: UTF-8
pub fn write_csv(messages: &[Message], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(file, messages, config)
}

/// Converts messages to a CSV string.
///
/// Same format as [`write_csv`], but returns a String instead of writing to
/// file.
pub fn to_csv(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, messages, config)?;
    String::from_utf8(buffer).map_err(|e| WachatError::invalid_format("csv", e.to_string()))
}

fn write_records<W: Write>(out: W, messages: &[Message], config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;
    for msg in messages {
        writer.write_record(build_record(msg, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::with_capacity(4);

    if config.include_timestamps {
        header.push("Timestamp");
    }
    header.push("Author");
    header.push("Message");
    if config.include_initials {
        header.push("Initials");
    }

    header
}

fn build_record(msg: &Message, config: &OutputConfig) -> Vec<String> {
    let OutputRecord {
        timestamp,
        author,
        message,
        initials,
    } = OutputRecord::from_message(msg, config, TIMESTAMP_FORMAT);

    timestamp
        .into_iter()
        .chain([author, message])
        .chain(initials)
        .collect()
}
