//! Output configuration and the flattened record the writers emit.

use serde::Serialize;

use crate::Message;
use crate::initials::compute_initials;
use crate::markup::htmlify_message;

/// Configuration for output format.
///
/// Controls which derived fields are written and whether bodies are
/// rendered as markup.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Include timestamps in output (default: true)
    pub include_timestamps: bool,
    /// Include author initials in output (default: false)
    pub include_initials: bool,
    /// Render message bodies with [`htmlify_message`] (default: false)
    pub htmlify: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_timestamps: true,
            include_initials: false,
            htmlify: false,
        }
    }
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamps(mut self, include: bool) -> Self {
        self.include_timestamps = include;
        self
    }

    #[must_use]
    pub fn with_initials(mut self, include: bool) -> Self {
        self.include_initials = include;
        self
    }

    #[must_use]
    pub fn with_htmlify(mut self, enabled: bool) -> Self {
        self.htmlify = enabled;
        self
    }
}

/// One output row, with only the fields enabled in [`OutputConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    pub author: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
}

impl OutputRecord {
    /// Builds the record of a message; `timestamp_format` is a chrono format
    /// string.
    pub fn from_message(msg: &Message, config: &OutputConfig, timestamp_format: &str) -> Self {
        Self {
            timestamp: config
                .include_timestamps
                .then(|| msg.timestamp.format(timestamp_format).to_string()),
            author: msg.author.clone(),
            message: if config.htmlify {
                htmlify_message(&msg.message)
            } else {
                msg.message.clone()
            },
            initials: config
                .include_initials
                .then(|| compute_initials(&msg.author)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn msg(author: &str, body: &str) -> Message {
        let ts = NaiveDate::from_ymd_opt(2018, 6, 23)
            .unwrap()
            .and_hms_opt(13, 55, 0)
            .unwrap();
        Message::new(ts, author, body)
    }

    #[test]
    fn test_default_config() {
        let config = OutputConfig::default();
        assert!(config.include_timestamps);
        assert!(!config.include_initials);
        assert!(!config.htmlify);
    }

    #[test]
    fn test_record_plain() {
        let record = OutputRecord::from_message(
            &msg("Loris", "*hi*"),
            &OutputConfig::new().with_timestamps(false),
            "%Y-%m-%d",
        );
        assert_eq!(record.timestamp, None);
        assert_eq!(record.message, "*hi*");
        assert_eq!(record.initials, None);
    }

    #[test]
    fn test_record_decorated() {
        let config = OutputConfig::new().with_initials(true).with_htmlify(true);
        let record = OutputRecord::from_message(&msg("Luke Skywalker", "*hi*"), &config, "%Y-%m-%d %H:%M");
        assert_eq!(record.timestamp.as_deref(), Some("2018-06-23 13:55"));
        assert_eq!(record.message, "<b>hi</b>");
        assert_eq!(record.initials.as_deref(), Some("LS"));
    }
}
