//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of messages - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one object per line - requires `json-output` feature
//!
//! Every writer takes an [`OutputConfig`](crate::core::models::OutputConfig)
//! deciding whether timestamps and initials are written and whether bodies
//! are rendered as markup.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> wachat::Result<()> {
//! use wachat::core::output::{write_csv, write_json, write_jsonl, to_csv};
//! use wachat::core::models::OutputConfig;
//! use wachat::parser::TranscriptParser;
//!
//! let messages = TranscriptParser::new().parse_file("chat.txt")?.into_messages();
//! let config = OutputConfig::new().with_initials(true);
//!
//! // Write to files
//! write_csv(&messages, "output.csv", &config)?;
//! write_json(&messages, "output.json", &config)?;
//! write_jsonl(&messages, "output.jsonl", &config)?;
//!
//! // Or get as strings
//! let csv_string = to_csv(&messages, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
