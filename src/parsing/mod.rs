//! The two-stage parsing pipeline.
//!
//! 1. [`make_logical_messages`] groups raw lines into [`LogicalMessage`]s and
//!    tags each one as authored or system.
//! 2. [`parse_messages`] decodes timestamp, author and body of each one.
//!
//! Both stages are pure functions over in-memory data. [`parse_transcript`]
//! chains them for a whole transcript held in a string.
//!
//! ```
//! use wachat::config::ParseOptions;
//! use wachat::parsing::parse_transcript;
//!
//! let result = parse_transcript(
//!     "06/03/2017, 00:45 - You created group \"Test\"\n\
//!      23/06/2018, 01:55 p.m. - Loris: one\n\
//!      two",
//!     &ParseOptions::days_first(),
//! );
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.messages[0].author, "System");
//! assert_eq!(result.messages[1].message, "one\ntwo");
//! ```
//!
//! [`LogicalMessage`]: crate::message::LogicalMessage

pub mod dates;
pub mod decoder;
pub mod merger;
pub mod signature;

pub use decoder::{
    decode_message, infer_days_first, infer_days_first_from_headers, parse_messages,
    parse_transcript, try_parse_messages,
};
pub use merger::{LineMerger, classify, make_logical_messages};
pub use signature::{HeaderMatch, SignatureFamily, is_header_line, match_header, split_author};
