//! Unified error types for wachat.
//!
//! This module provides a single [`WachatError`] enum that covers all error
//! cases in the library.
//!
//! # Error Handling Philosophy
//!
//! - **Library users** get typed errors they can match on
//! - **Application users** get clear, actionable error messages
//! - **Developers** get source error chains for debugging
//!
//! Undecodable messages are absorbed by default: [`parse_messages`] skips them
//! and logs a warning. Strict callers use [`try_parse_messages`] and receive a
//! [`WachatError::Decode`] naming the offending text.
//!
//! [`parse_messages`]: crate::parsing::parse_messages
//! [`try_parse_messages`]: crate::parsing::try_parse_messages

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for wachat operations.
///
/// # Example
///
/// ```rust
/// use wachat::error::Result;
/// use wachat::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     // ... operations that may fail
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, WachatError>;

/// The error type for all wachat operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WachatError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A logical message could not be decoded.
    ///
    /// `text` is the raw text of the offending message, header line first.
    #[error("Cannot decode message ({kind}): {}", first_line(text))]
    Decode {
        /// What went wrong
        #[source]
        kind: DecodeErrorKind,
        /// The raw message text
        text: String,
    },

    /// Invalid date format in filter configuration.
    ///
    /// Date filters expect YYYY-MM-DD format.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },

    /// A requested format is unknown or not compiled in.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The kind of format that was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a logical message fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    /// The header does not match any supported timestamp signature.
    #[error("unrecognized timestamp format")]
    UnrecognizedTimestamp,
    /// The timestamp matched, but the date or time is out of range (e.g. 31/02).
    #[error("date or time out of range")]
    InvalidDate,
    /// The message is tagged as authored but has no `<author>: ` segment.
    #[error("missing author segment")]
    MissingAuthor,
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl WachatError {
    /// Creates a decode error for the given message text.
    pub fn decode(kind: DecodeErrorKind, text: impl Into<String>) -> Self {
        WachatError::Decode {
            kind,
            text: text.into(),
        }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        WachatError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        WachatError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, WachatError::Io(_))
    }

    /// Returns `true` if this is a decode error.
    pub fn is_decode(&self) -> bool {
        matches!(self, WachatError::Decode { .. })
    }

    /// Returns the decode error kind, if this is a decode error.
    pub fn decode_kind(&self) -> Option<DecodeErrorKind> {
        match self {
            WachatError::Decode { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, WachatError::InvalidFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, WachatError::InvalidDate { .. })
    }
}
