//! Configuration types for parsing.
//!
//! - [`ParseOptions`] - the options of a single decode pass (day/month order)
//! - [`TranscriptConfig`] - file-level parser settings, builder style
//!
//! # Example
//!
//! ```rust
//! use wachat::config::TranscriptConfig;
//! use wachat::parser::TranscriptParser;
//!
//! let config = TranscriptConfig::new()
//!     .with_days_first(Some(true))
//!     .with_skip_invalid(false);
//!
//! let parser = TranscriptParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Options for decoding logical messages.
///
/// `days_first` resolves dates whose first two numeric components are both
/// `<= 12`:
///
/// - `Some(true)` - day comes first (`03/06/18` is 3 June)
/// - `Some(false)` - month comes first (`03/06/18` is 6 March)
/// - `None` (default) - inferred from the whole transcript, falling back to
///   day-first when the transcript gives no hint
///
/// A component greater than 12 is always the day, whatever this says.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Day/month order for ambiguous dates.
    #[serde(default)]
    pub days_first: Option<bool>,
}

impl ParseOptions {
    /// Creates options that infer the day/month order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Day before month.
    pub fn days_first() -> Self {
        Self {
            days_first: Some(true),
        }
    }

    /// Month before day.
    pub fn months_first() -> Self {
        Self {
            days_first: Some(false),
        }
    }
}

/// Configuration for transcript parsing.
///
/// # Example
///
/// ```rust
/// use wachat::config::TranscriptConfig;
///
/// let config = TranscriptConfig::new()
///     .with_streaming(true)
///     .with_sample_size(500);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptConfig {
    /// Day/month order; `None` infers it (default: None)
    pub days_first: Option<bool>,

    /// Skip undecodable messages instead of returning errors (default: true)
    pub skip_invalid: bool,

    /// Enable streaming mode for large files (default: false)
    pub streaming: bool,

    /// Buffer size for streaming (default: 64KB)
    pub buffer_size: usize,

    /// Lines read ahead to infer the day/month order when streaming (default: 200)
    pub sample_size: usize,
}

impl Default for TranscriptConfig {
    fn default() -> Self {
        Self {
            days_first: None,
            skip_invalid: true,
            streaming: false,
            buffer_size: 64 * 1024, // 64KB
            sample_size: 200,
        }
    }
}

impl TranscriptConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a streaming-optimized configuration.
    pub fn streaming() -> Self {
        Self {
            streaming: true,
            buffer_size: 256 * 1024, // 256KB for streaming
            ..Self::default()
        }
    }

    /// Sets the day/month order.
    #[must_use]
    pub fn with_days_first(mut self, days_first: Option<bool>) -> Self {
        self.days_first = days_first;
        self
    }

    /// Sets whether to skip undecodable messages.
    #[must_use]
    pub fn with_skip_invalid(mut self, skip: bool) -> Self {
        self.skip_invalid = skip;
        self
    }

    /// Enables or disables streaming mode.
    #[must_use]
    pub fn with_streaming(mut self, enabled: bool) -> Self {
        self.streaming = enabled;
        self
    }

    /// Sets the buffer size for streaming.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Sets how many lines are sampled for day/month inference when streaming.
    #[must_use]
    pub fn with_sample_size(mut self, lines: usize) -> Self {
        self.sample_size = lines;
        self
    }

    /// Decode options derived from this configuration.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            days_first: self.days_first,
        }
    }
}
