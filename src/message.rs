//! Message types produced by the parsing pipeline.
//!
//! The pipeline has two stages and one type per stage:
//!
//! - [`LogicalMessage`] - one transcript entry reassembled from its physical
//!   lines and tagged with a [`MessageKind`]
//! - [`Message`] - the decoded record: timestamp, author and body
//!
//! [`ParseResult`] wraps the ordered list of decoded messages.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use wachat::Message;
//!
//! let ts = NaiveDate::from_ymd_opt(2018, 6, 23)
//!     .unwrap()
//!     .and_hms_opt(13, 55, 0)
//!     .unwrap();
//! let msg = Message::new(ts, "Loris", "one\ntwo");
//!
//! assert_eq!(msg.author(), "Loris");
//! assert!(!msg.is_system());
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Author sentinel used for system messages.
pub const SYSTEM_AUTHOR: &str = "System";

/// Whether a transcript entry was written by a participant or generated by
/// the platform.
///
/// Decided once, from the header line, when the logical message is opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// `<author>: <body>` after the timestamp.
    Authored,
    /// Group created, member added, encryption notice, etc.
    System,
}

/// One conceptual chat entry, possibly spanning several physical lines.
///
/// `text` holds the header line followed by every continuation line, joined
/// with `\n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalMessage {
    /// Authored or system.
    pub kind: MessageKind,
    /// Header line plus continuation lines.
    pub text: String,
}

impl LogicalMessage {
    /// Creates a logical message from its header line.
    pub fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Shorthand for an authored message.
    pub fn authored(text: impl Into<String>) -> Self {
        Self::new(MessageKind::Authored, text)
    }

    /// Shorthand for a system message.
    pub fn system(text: impl Into<String>) -> Self {
        Self::new(MessageKind::System, text)
    }

    /// Returns `true` if the platform generated this entry.
    pub fn is_system(&self) -> bool {
        self.kind == MessageKind::System
    }

    /// Appends a continuation line.
    pub fn push_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(line);
    }

    /// Returns the header line.
    pub fn header(&self) -> &str {
        self.split().0
    }

    /// Splits into the header line and the continuation block, if any.
    pub fn split(&self) -> (&str, Option<&str>) {
        match self.text.split_once('\n') {
            Some((header, rest)) => (header, Some(rest)),
            None => (&self.text, None),
        }
    }

    /// Number of physical lines this message was built from.
    pub fn line_count(&self) -> usize {
        self.text.matches('\n').count() + 1
    }
}

/// A decoded chat message.
///
/// System messages carry [`SYSTEM_AUTHOR`] as their author. The
/// [`MessageKind`] is kept alongside, so a participant who happens to be
/// called "System" is still an authored message. It is not serialized;
/// deserialized messages take their kind from the author sentinel.
///
/// # Serialization
///
/// ```
/// use chrono::NaiveDate;
/// use wachat::Message;
///
/// let ts = NaiveDate::from_ymd_opt(2017, 3, 6).unwrap().and_hms_opt(0, 45, 0).unwrap();
/// let msg = Message::system(ts, "You created group \"Test\"");
/// let json = serde_json::to_string(&msg)?;
///
/// assert!(json.contains(r#""author":"System""#));
/// assert!(json.contains("2017-03-06T00:45:00"));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SerializedMessage")]
pub struct Message {
    /// Calendar date and time as written in the export (no timezone).
    pub timestamp: NaiveDateTime,

    /// Display name of the author, or [`SYSTEM_AUTHOR`].
    pub author: String,

    /// Message body. May contain newlines for multiline messages.
    pub message: String,

    #[serde(skip_serializing)]
    kind: MessageKind,
}

#[derive(Deserialize)]
struct SerializedMessage {
    timestamp: NaiveDateTime,
    author: String,
    message: String,
}

impl From<SerializedMessage> for Message {
    fn from(raw: SerializedMessage) -> Self {
        Self::new(raw.timestamp, raw.author, raw.message)
    }
}

impl Message {
    /// Creates a new message.
    ///
    /// The kind follows the author: [`SYSTEM_AUTHOR`] makes a system
    /// message. Use [`Message::authored`] for a participant with that name.
    pub fn new(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let author = author.into();
        let kind = if author == SYSTEM_AUTHOR {
            MessageKind::System
        } else {
            MessageKind::Authored
        };
        Self {
            timestamp,
            author,
            message: message.into(),
            kind,
        }
    }

    /// Creates an authored message, whatever the author is called.
    pub fn authored(
        timestamp: NaiveDateTime,
        author: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            author: author.into(),
            message: message.into(),
            kind: MessageKind::Authored,
        }
    }

    /// Creates a system message.
    pub fn system(timestamp: NaiveDateTime, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            author: SYSTEM_AUTHOR.to_string(),
            message: message.into(),
            kind: MessageKind::System,
        }
    }

    /// Returns whether the message is authored or a system notice.
    pub fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Returns the timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the author name.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns `true` for system notices.
    pub fn is_system(&self) -> bool {
        self.kind == MessageKind::System
    }

    /// Returns `true` if the body is empty or whitespace-only.
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }
}

/// Output of a parse: decoded messages in transcript order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Decoded messages, in input order.
    pub messages: Vec<Message>,
}

impl ParseResult {
    /// Wraps a list of messages.
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Number of decoded messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if nothing was decoded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates over the messages.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Unwraps into the message list.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }
}

impl IntoIterator for ParseResult {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParseResult {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl From<Vec<Message>> for ParseResult {
    fn from(messages: Vec<Message>) -> Self {
        Self::new(messages)
    }
}
