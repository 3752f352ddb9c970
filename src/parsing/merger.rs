//! Reassembles physical lines into logical messages.
//!
//! A header line opens a message; every following non-header line belongs to
//! it. The kind (authored or system) is decided from the header alone.

use tracing::debug;

use crate::message::{LogicalMessage, MessageKind};

use super::signature::{match_header, split_author};

/// Classifies a header line.
///
/// Returns `None` if the line is not a header.
pub fn classify(line: &str) -> Option<MessageKind> {
    let header = match_header(line)?;
    Some(if split_author(header.rest).is_some() {
        MessageKind::Authored
    } else {
        MessageKind::System
    })
}

/// Incremental line merger.
///
/// Feed lines with [`push`](Self::push); a completed message comes back each
/// time a new header closes the previous one. Call [`finish`](Self::finish)
/// at end of input for the last message.
#[derive(Debug, Default)]
pub struct LineMerger {
    current: Option<LogicalMessage>,
    dropped: usize,
}

impl LineMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes one physical line.
    pub fn push(&mut self, line: &str) -> Option<LogicalMessage> {
        if let Some(kind) = classify(line) {
            return self.current.replace(LogicalMessage::new(kind, line));
        }

        match self.current.as_mut() {
            Some(open) => open.push_line(line),
            None => {
                self.dropped += 1;
                debug!(line, "dropping line before first header");
            }
        }
        None
    }

    /// Returns the message still open, if any.
    pub fn finish(&mut self) -> Option<LogicalMessage> {
        self.current.take()
    }

    /// Lines dropped because no header preceded them.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Groups raw lines into logical messages.
///
/// # Example
///
/// ```
/// use wachat::parsing::make_logical_messages;
///
/// let messages = make_logical_messages([
///     "23/06/2018, 01:55 p.m. - Loris: one",
///     "two",
///     "06/03/2017, 00:45 - You created group \"Test\"",
/// ]);
///
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[0].text, "23/06/2018, 01:55 p.m. - Loris: one\ntwo");
/// assert!(messages[1].is_system());
/// ```
pub fn make_logical_messages<I, S>(lines: I) -> Vec<LogicalMessage>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut merger = LineMerger::new();
    let mut messages = Vec::new();

    for line in lines {
        if let Some(done) = merger.push(line.as_ref()) {
            messages.push(done);
        }
    }
    messages.extend(merger.finish());

    if merger.dropped() > 0 {
        debug!(dropped = merger.dropped(), "orphan lines dropped");
    }

    messages
}
