//! Post-processing of decoded messages.
//!
//! This module contains:
//! - [`filter`] - Message filtering by date, author and kind
//! - [`models`] - Output configuration and records
//! - [`output`] - Format writers (CSV, JSON, JSONL)

pub mod filter;
pub mod models;
pub mod output;

pub use filter::{FilterConfig, apply_filters};
pub use models::{OutputConfig, OutputRecord};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};
