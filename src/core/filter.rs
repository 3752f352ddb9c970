//! Filter messages by date range, author and kind.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering message collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | Author | [`with_author`](FilterConfig::with_author) | Messages from one participant |
//! | System | [`with_skip_system`](FilterConfig::with_skip_system) | Drop platform notices |
//!
//! # Examples
//!
//! ```
//! use wachat::core::filter::{FilterConfig, apply_filters};
//! use wachat::parsing::parse_transcript;
//! use wachat::config::ParseOptions;
//!
//! # fn main() -> wachat::Result<()> {
//! let result = parse_transcript(
//!     "01/01/2024, 10:00 - You created group \"Trip\"\n\
//!      01/01/2024, 10:01 - Alice: Old\n\
//!      15/06/2024, 12:00 - alice: New\n\
//!      15/06/2024, 12:01 - Bob: Hi",
//!     &ParseOptions::days_first(),
//! );
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_author("Alice");
//!
//! let filtered = apply_filters(result.into_messages(), &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].message, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Date bounds are inclusive whole days
//! - Author matching is case-insensitive
//! - Multiple filters are combined with AND logic

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::Message;
use crate::error::{Result, WachatError};

/// Configuration for filtering decoded messages.
///
/// Filters are combined with AND logic: a message must match all active
/// filters to be included in the result.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Include only messages on or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only messages on or before this timestamp.
    pub before: Option<NaiveDateTime>,

    /// Include only messages from this author (case-insensitive).
    pub author: Option<String>,

    /// Drop system messages.
    pub skip_system: bool,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`WachatError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_date(date_str)?.and_time(NaiveTime::MIN));
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`WachatError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        let date = parse_date(date_str)?;
        let end_of_day = date
            .and_hms_opt(23, 59, 59)
            .ok_or_else(|| WachatError::invalid_date(date_str))?;
        self.before = Some(end_of_day);
        Ok(self)
    }

    /// Sets the author filter.
    ///
    /// ```
    /// use wachat::core::filter::FilterConfig;
    ///
    /// // Matches "Alice", "alice", "ALICE"
    /// let config = FilterConfig::new().with_author("Alice");
    /// ```
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Drops system messages when `true`.
    #[must_use]
    pub fn with_skip_system(mut self, skip: bool) -> Self {
        self.skip_system = skip;
        self
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some() || self.author.is_some() || self.skip_system
    }

    /// Returns `true` if the message passes every active filter.
    pub fn matches(&self, msg: &Message) -> bool {
        if self.skip_system && msg.is_system() {
            return false;
        }
        if let Some(ref author) = self.author {
            if msg.author.to_lowercase() != author.to_lowercase() {
                return false;
            }
        }
        if self.after.is_some_and(|after| msg.timestamp < after) {
            return false;
        }
        if self.before.is_some_and(|before| msg.timestamp > before) {
            return false;
        }
        true
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| WachatError::invalid_date(date_str))
}

/// Filters a collection of messages based on the provided configuration.
///
/// Returns the input unchanged when no filter is active.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| config.matches(msg))
        .collect()
}
