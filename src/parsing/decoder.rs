//! Decodes logical messages into timestamped records.

use tracing::{debug, info, warn};

use crate::config::ParseOptions;
use crate::error::{DecodeErrorKind, Result, WachatError};
use crate::message::{LogicalMessage, Message, MessageKind, ParseResult};

use super::dates::{DateParts, infer_order, resolve_timestamp};
use super::merger::make_logical_messages;
use super::signature::{match_header, split_author};

/// Decodes one logical message.
///
/// # Errors
///
/// Returns [`WachatError::Decode`] when the header has no recognizable
/// timestamp, the date is out of range, or an authored message lacks its
/// `<author>: ` segment.
pub fn decode_message(logical: &LogicalMessage, days_first: bool) -> Result<Message> {
    let fail = |kind| WachatError::decode(kind, logical.text.as_str());

    let (header_line, continuation) = logical.split();
    let header =
        match_header(header_line).ok_or_else(|| fail(DecodeErrorKind::UnrecognizedTimestamp))?;
    let timestamp =
        resolve_timestamp(&header, days_first).ok_or_else(|| fail(DecodeErrorKind::InvalidDate))?;

    let (author, body) = match logical.kind {
        MessageKind::Authored => {
            let (author, body) =
                split_author(header.rest).ok_or_else(|| fail(DecodeErrorKind::MissingAuthor))?;
            (Some(author), body)
        }
        MessageKind::System => (None, header.rest),
    };

    let mut message = body.to_string();
    if let Some(more) = continuation {
        message.push('\n');
        message.push_str(more);
    }

    Ok(match author {
        Some(author) => Message::authored(timestamp, author, message),
        None => Message::system(timestamp, message),
    })
}

/// Infers the day/month order from header lines.
///
/// Lines that are not headers are ignored, so raw transcript lines work too.
pub fn infer_days_first_from_headers<'a, I>(lines: I) -> Option<bool>
where
    I: IntoIterator<Item = &'a str>,
{
    let dates: Vec<DateParts> = lines
        .into_iter()
        .filter_map(match_header)
        .filter_map(|header| DateParts::from_components(header.date))
        .collect();
    infer_order(&dates)
}

/// Infers the day/month order of a whole transcript.
///
/// Returns `None` when the dates give no hint either way.
pub fn infer_days_first(messages: &[LogicalMessage]) -> Option<bool> {
    infer_days_first_from_headers(messages.iter().map(LogicalMessage::header))
}

fn resolve_days_first(messages: &[LogicalMessage], options: &ParseOptions) -> bool {
    if let Some(days_first) = options.days_first {
        return days_first;
    }
    let inferred = infer_days_first(messages);
    debug!(?inferred, "inferred day/month order");
    inferred.unwrap_or(true)
}

/// Decodes logical messages, skipping the ones that cannot be decoded.
///
/// Skipped messages are logged at `warn` level.
///
/// # Example
///
/// ```
/// use wachat::config::ParseOptions;
/// use wachat::parsing::{make_logical_messages, parse_messages};
///
/// let logical = make_logical_messages([
///     "3/6/18, 1:55 p.m. - a: m",
///     "31/02/18, 1:55 p.m. - a: impossible date",
/// ]);
/// let result = parse_messages(&logical, &ParseOptions::months_first());
///
/// assert_eq!(result.len(), 1);
/// assert_eq!(result.messages[0].timestamp.to_string(), "2018-03-06 13:55:00");
/// ```
pub fn parse_messages(messages: &[LogicalMessage], options: &ParseOptions) -> ParseResult {
    let days_first = resolve_days_first(messages, options);

    let mut decoded = Vec::with_capacity(messages.len());
    let mut skipped = 0usize;
    for logical in messages {
        match decode_message(logical, days_first) {
            Ok(message) => decoded.push(message),
            Err(e) => {
                skipped += 1;
                warn!(error = %e, "skipping undecodable message");
            }
        }
    }

    info!(decoded = decoded.len(), skipped, days_first, "decoded transcript");
    ParseResult::new(decoded)
}

/// Decodes logical messages, failing on the first undecodable one.
pub fn try_parse_messages(
    messages: &[LogicalMessage],
    options: &ParseOptions,
) -> Result<ParseResult> {
    let days_first = resolve_days_first(messages, options);

    let decoded = messages
        .iter()
        .map(|logical| decode_message(logical, days_first))
        .collect::<Result<Vec<_>>>()?;

    info!(decoded = decoded.len(), days_first, "decoded transcript");
    Ok(ParseResult::new(decoded))
}

/// Merges and decodes a whole transcript held in memory.
///
/// A leading byte-order mark is ignored.
pub fn parse_transcript(content: &str, options: &ParseOptions) -> ParseResult {
    let content = content.strip_prefix('\u{FEFF}').unwrap_or(content);
    parse_messages(&make_logical_messages(content.lines()), options)
}
