//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the argument structure of the `wachat`
//! binary, and the conversions from it to library configuration.

use clap::{ArgAction, Parser};

use crate::config::TranscriptConfig;
use crate::core::filter::FilterConfig;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::format::OutputFormat;

/// Parse WhatsApp chat exports into structured, timestamped messages.
#[derive(Parser, Debug, Clone)]
#[command(name = "wachat")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    wachat \"WhatsApp Chat with Alice.txt\"
    wachat chat.txt -o messages.json -f json --initials
    wachat chat.txt --months-first --after 2024-01-01 --no-system
    wachat huge_chat.txt --streaming -f jsonl -v")]
pub struct Args {
    /// Path to the exported transcript
    pub input: String,

    /// Path to output file [default: messages.<format extension>]
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Read ambiguous dates as day/month (default: inferred)
    #[arg(long, conflicts_with = "months_first")]
    pub days_first: bool,

    /// Read ambiguous dates as month/day (default: inferred)
    #[arg(long)]
    pub months_first: bool,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep messages from this author only (case-insensitive)
    #[arg(long, value_name = "AUTHOR")]
    pub from: Option<String>,

    /// Drop system messages
    #[arg(long)]
    pub no_system: bool,

    /// Render message bodies as HTML (links, bold, italic, ...)
    #[arg(long)]
    pub html: bool,

    /// Add author initials to the output
    #[arg(long)]
    pub initials: bool,

    /// Leave timestamps out of the output
    #[arg(long)]
    pub no_timestamps: bool,

    /// Fail on the first undecodable message instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Stream the input line by line (for very large exports)
    #[arg(long)]
    pub streaming: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Day/month order requested on the command line.
    pub fn days_first(&self) -> Option<bool> {
        match (self.days_first, self.months_first) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Parser configuration.
    pub fn transcript_config(&self) -> TranscriptConfig {
        let base = if self.streaming {
            TranscriptConfig::streaming()
        } else {
            TranscriptConfig::new()
        };
        base.with_days_first(self.days_first())
            .with_skip_invalid(!self.strict)
    }

    /// Filter configuration.
    ///
    /// # Errors
    ///
    /// Returns [`WachatError::InvalidDate`](crate::WachatError::InvalidDate)
    /// for a malformed `--after` or `--before`.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new().with_skip_system(self.no_system);
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        if let Some(ref from) = self.from {
            config = config.with_author(from.clone());
        }
        Ok(config)
    }

    /// Output configuration.
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new()
            .with_timestamps(!self.no_timestamps)
            .with_initials(self.initials)
            .with_htmlify(self.html)
    }

    /// Default log filter directive for the verbosity level.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Output path: `--output` as given, else `messages.<ext>` for the
    /// chosen format.
    pub fn output_path(&self) -> String {
        match self.output {
            Some(ref output) => output.clone(),
            None => format!("messages.{}", self.format.extension()),
        }
    }
}
