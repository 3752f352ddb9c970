//! # wachat
//!
//! A Rust library for turning WhatsApp "Export chat" text files into
//! structured, timestamped messages.
//!
//! ## Overview
//!
//! A WhatsApp export is a plain-text transcript where every message starts
//! with a header line holding a date, a time and usually an author. The
//! exact header shape depends on the phone's locale and operating system:
//!
//! - **Android** - `06/03/2017, 00:45 - Luke: Hello`
//! - **Android (12-hour)** - `3/6/18, 1:55 p.m. - Luke: Hello`
//! - **iOS** - `[06.03.17, 00:45:12] Luke: Hello`
//! - **Locale variants** - dotted or dashed dates, year first, `a.m.`/`PM`,
//!   bidi marks in front of the header
//!
//! wachat recognizes all of them, merges continuation lines into their
//! message, tells system notices apart from authored messages, and works out
//! whether ambiguous dates are day-first or month-first.
//!
//! ## Quick Start
//!
//! ```rust
//! use wachat::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let transcript = "\
//! 06/03/2017, 00:45 - Messages to this group are now secured with end-to-end encryption.
//! 06/03/2017, 00:45 - You created group \"Test\"
//! 08/03/2017, 13:50 - Luke: Hey, are you there?
//! I'm writing a second line";
//!
//!     let result = TranscriptParser::new().parse_str(transcript)?;
//!
//!     assert_eq!(result.len(), 3);
//!     assert!(result.messages[0].is_system());
//!     assert_eq!(result.messages[2].author, "Luke");
//!     assert_eq!(result.messages[2].message, "Hey, are you there?\nI'm writing a second line");
//!     Ok(())
//! }
//! ```
//!
//! ## Streaming for Large Files
//!
//! ```rust,no_run
//! # #[cfg(feature = "streaming")]
//! # fn main() -> wachat::Result<()> {
//! use std::path::Path;
//! use wachat::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::with_streaming();
//!
//! // Process messages one at a time
//! for result in parser.stream(Path::new("WhatsApp Chat.txt"))? {
//!     let msg = result?;
//!     println!("{} {}: {}", msg.timestamp, msg.author, msg.message);
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "streaming"))]
//! # fn main() {}
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] - The two-stage pipeline
//!   - [`make_logical_messages`](parsing::make_logical_messages) - lines to logical messages
//!   - [`parse_messages`](parsing::parse_messages) - logical messages to [`Message`]s
//!   - [`parse_transcript`](parsing::parse_transcript) - both stages at once
//! - [`parser`] - [`TranscriptParser`], file-level entry point
//! - [`streaming`] - [`TranscriptStream`](streaming::TranscriptStream) for large files
//! - [`config`] - [`ParseOptions`], [`TranscriptConfig`]
//! - [`markup`] - [`htmlify_message`](markup::htmlify_message)
//! - [`initials`] - [`compute_initials`](initials::compute_initials)
//! - [`core`] - Filtering and output writers
//! - [`format`] - [`OutputFormat`](format::OutputFormat) dispatch
//! - [`error`] - [`WachatError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod initials;
pub mod markup;
pub mod message;
pub mod parser;
pub mod parsing;
#[cfg(feature = "streaming")]
pub mod streaming;

// Re-export the main types at the crate root for convenience
pub use config::{ParseOptions, TranscriptConfig};
pub use error::{DecodeErrorKind, Result, WachatError};
pub use message::{LogicalMessage, Message, MessageKind, ParseResult, SYSTEM_AUTHOR};
pub use parser::TranscriptParser;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use wachat::prelude::*;
/// ```
pub mod prelude {
    // Messages
    pub use crate::message::{LogicalMessage, Message, MessageKind, ParseResult, SYSTEM_AUTHOR};

    // Error types
    pub use crate::error::{Result, WachatError};

    // Parsing
    pub use crate::config::{ParseOptions, TranscriptConfig};
    pub use crate::parser::TranscriptParser;
    pub use crate::parsing::{make_logical_messages, parse_messages, parse_transcript};

    #[cfg(feature = "streaming")]
    pub use crate::streaming::TranscriptStream;

    // Presentation helpers
    pub use crate::initials::compute_initials;
    pub use crate::markup::htmlify_message;

    // Filtering and output
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::OutputConfig;
    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};
}
