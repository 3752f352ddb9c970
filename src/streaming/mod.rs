//! Streaming parser for memory-efficient processing of large exports.
//!
//! [`TranscriptStream`] reads a transcript line by line and yields decoded
//! messages as soon as the next header closes them, so memory stays flat no
//! matter how long the chat is.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use wachat::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::with_streaming();
//! let mut stream = parser.stream(Path::new("large_chat.txt"))?;
//!
//! while let Some(result) = stream.next() {
//!     match result {
//!         Ok(message) => println!("{}: {}", message.author, message.message),
//!         Err(e) => eprintln!("Skipped invalid message: {}", e),
//!     }
//!     if let Some(pct) = stream.progress() {
//!         eprint!("\r{:.1}%", pct);
//!     }
//! }
//! # Ok::<(), wachat::WachatError>(())
//! ```
//!
//! # Memory Usage
//!
//! | Approach | 1GB File |
//! |----------|----------|
//! | [`TranscriptParser::parse`](crate::parser::TranscriptParser::parse) | ~3GB RAM |
//! | [`TranscriptStream`] | buffer + one message |

mod transcript;

pub use transcript::TranscriptStream;
