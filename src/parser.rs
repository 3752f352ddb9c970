//! File-level entry point.
//!
//! [`TranscriptParser`] reads a transcript from disk or memory and runs it
//! through the parsing pipeline with the settings of a [`TranscriptConfig`].
//!
//! # Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use wachat::parser::TranscriptParser;
//!
//! let parser = TranscriptParser::new();
//!
//! // Parse entire file into memory
//! let result = parser.parse(Path::new("WhatsApp Chat.txt"))?;
//! println!("{} messages", result.len());
//!
//! // Or stream for large files
//! # #[cfg(feature = "streaming")]
//! for message in parser.stream(Path::new("large_chat.txt"))? {
//!     let message = message?;
//!     println!("{}: {}", message.author, message.message);
//! }
//! # Ok::<(), wachat::WachatError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::info;

use crate::Message;
use crate::config::TranscriptConfig;
use crate::error::Result;
use crate::message::ParseResult;
use crate::parsing::{make_logical_messages, parse_messages, try_parse_messages};

#[cfg(feature = "streaming")]
use std::fs::File;
#[cfg(feature = "streaming")]
use std::io::BufReader;

#[cfg(feature = "streaming")]
use crate::streaming::TranscriptStream;

/// Parser for WhatsApp text exports.
///
/// # Example
///
/// ```rust
/// use wachat::config::TranscriptConfig;
/// use wachat::parser::TranscriptParser;
///
/// let parser = TranscriptParser::with_config(TranscriptConfig::new().with_days_first(Some(false)));
/// let result = parser.parse_str("3/6/18, 1:55 p.m. - a: m")?;
///
/// assert_eq!(result.messages[0].timestamp.to_string(), "2018-03-06 13:55:00");
/// # Ok::<(), wachat::WachatError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranscriptParser {
    config: TranscriptConfig,
}

impl TranscriptParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: TranscriptConfig) -> Self {
        Self { config }
    }

    /// Creates a parser optimized for streaming large files.
    pub fn with_streaming() -> Self {
        Self {
            config: TranscriptConfig::streaming(),
        }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &TranscriptConfig {
        &self.config
    }

    /// Parses a transcript file, loading it into memory.
    ///
    /// # Errors
    ///
    /// Returns [`WachatError::Io`](crate::WachatError::Io) if the file cannot
    /// be read, and a decode error in strict mode (`skip_invalid = false`).
    pub fn parse(&self, path: &Path) -> Result<ParseResult> {
        let content = fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Parses a transcript file (convenience method accepting &str path).
    pub fn parse_file(&self, path: &str) -> Result<ParseResult> {
        self.parse(Path::new(path))
    }

    /// Parses transcript content held in memory.
    pub fn parse_str(&self, content: &str) -> Result<ParseResult> {
        let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
        let logical = make_logical_messages(content.lines());
        let options = self.config.parse_options();

        let result = if self.config.skip_invalid {
            parse_messages(&logical, &options)
        } else {
            try_parse_messages(&logical, &options)?
        };

        info!(
            logical = logical.len(),
            decoded = result.len(),
            "parsed transcript"
        );
        Ok(result)
    }

    /// Streams messages from a file without loading it into memory.
    #[cfg(feature = "streaming")]
    pub fn stream(&self, path: &Path) -> Result<TranscriptStream<BufReader<File>>> {
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        TranscriptStream::new(reader, Some(size), &self.config)
    }

    /// Streams messages (convenience method accepting &str path).
    #[cfg(feature = "streaming")]
    pub fn stream_file(&self, path: &str) -> Result<TranscriptStream<BufReader<File>>> {
        self.stream(Path::new(path))
    }

    /// Reads all messages of a file, streaming when the configuration asks
    /// for it.
    ///
    /// In strict mode the first undecodable message aborts the read either
    /// way.
    pub fn load(&self, path: &Path) -> Result<Vec<Message>> {
        #[cfg(feature = "streaming")]
        if self.config.streaming {
            return self.stream(path)?.collect();
        }

        Ok(self.parse(path)?.into_messages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CHAT: &str = "\
06/03/2017, 00:45 - You created group \"Test\"
23/06/2018, 01:55 p.m. - Loris: one
two
31/02/2018, 10:00 - Luke: impossible";

    fn chat_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CHAT.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_parse_str_skips_invalid() {
        let result = TranscriptParser::new().parse_str(CHAT).unwrap();
        assert_eq!(result.len(), 2);
        assert!(result.messages[0].is_system());
        assert_eq!(result.messages[1].message, "one\ntwo");
    }

    #[test]
    fn test_parse_str_strict() {
        let parser = TranscriptParser::with_config(TranscriptConfig::new().with_skip_invalid(false));
        let err = parser.parse_str(CHAT).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_parse_file() {
        let file = chat_file();
        let result = TranscriptParser::new()
            .parse_file(file.path().to_str().unwrap())
            .unwrap();
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_parse_missing_file() {
        let err = TranscriptParser::new()
            .parse(Path::new("/nonexistent/chat.txt"))
            .unwrap_err();
        assert!(err.is_io());
    }

    #[cfg(feature = "streaming")]
    #[test]
    fn test_load_streaming_matches_in_memory() {
        let file = chat_file();
        let in_memory = TranscriptParser::new().load(file.path()).unwrap();
        let streamed = TranscriptParser::with_streaming().load(file.path()).unwrap();
        assert_eq!(in_memory, streamed);
    }

    #[test]
    fn test_parser_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TranscriptParser>();
    }
}
