//! Line-streaming transcript parser.

use std::collections::VecDeque;
use std::io::{self, BufRead};

use tracing::{debug, warn};

use crate::Message;
use crate::config::TranscriptConfig;
use crate::error::Result;
use crate::parsing::{LineMerger, decode_message, infer_days_first_from_headers};

/// Iterator over the messages of a transcript read line by line.
///
/// Holds one open logical message at a time. When the configuration leaves
/// the day/month order open, the first `sample_size` lines are read ahead
/// and used to infer it; they are then replayed in order.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use wachat::config::TranscriptConfig;
/// use wachat::streaming::TranscriptStream;
///
/// let txt = "3/25/18, 9:00 a.m. - Alice: hi\nthere\n3/26/18, 9:01 a.m. - Bob: hey";
/// let stream = TranscriptStream::from_reader(Cursor::new(txt), &TranscriptConfig::new())?;
/// assert!(!stream.days_first());
///
/// let messages: Vec<_> = stream.collect::<Result<_, _>>()?;
/// assert_eq!(messages.len(), 2);
/// assert_eq!(messages[0].message, "hi\nthere");
/// # Ok::<(), wachat::WachatError>(())
/// ```
pub struct TranscriptStream<R: BufRead> {
    reader: R,
    total_bytes: Option<u64>,
    bytes_read: u64,
    line_buffer: String,
    sample: VecDeque<String>,
    merger: LineMerger,
    days_first: bool,
    skip_invalid: bool,
    finished: bool,
}

impl<R: BufRead> TranscriptStream<R> {
    /// Creates a stream over `reader`.
    ///
    /// `total_bytes` is the input size if known, for progress reporting.
    pub fn new(reader: R, total_bytes: Option<u64>, config: &TranscriptConfig) -> Result<Self> {
        let mut stream = Self {
            reader,
            total_bytes,
            bytes_read: 0,
            line_buffer: String::with_capacity(4096),
            sample: VecDeque::new(),
            merger: LineMerger::new(),
            days_first: true,
            skip_invalid: config.skip_invalid,
            finished: false,
        };

        stream.days_first = match config.days_first {
            Some(days_first) => days_first,
            None => {
                while stream.sample.len() < config.sample_size {
                    match stream.read_line()? {
                        Some(line) => stream.sample.push_back(line),
                        None => break,
                    }
                }
                let inferred =
                    infer_days_first_from_headers(stream.sample.iter().map(String::as_str));
                debug!(?inferred, sampled = stream.sample.len(), "inferred day/month order");
                inferred.unwrap_or(true)
            }
        };

        Ok(stream)
    }

    /// Creates a stream over input of unknown size.
    pub fn from_reader(reader: R, config: &TranscriptConfig) -> Result<Self> {
        Self::new(reader, None, config)
    }

    /// The day/month order in use.
    pub fn days_first(&self) -> bool {
        self.days_first
    }

    /// Returns approximate progress as a percentage (0.0 to 100.0).
    ///
    /// `None` when the total size is unknown or zero.
    pub fn progress(&self) -> Option<f64> {
        match self.total_bytes {
            Some(total) if total > 0 => Some((self.bytes_read as f64 / total as f64) * 100.0),
            _ => None,
        }
    }

    /// Bytes consumed from the reader so far, read-ahead included.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    /// Total input size, if known.
    pub fn total_bytes(&self) -> Option<u64> {
        self.total_bytes
    }

    /// Reads one physical line without its line terminator.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.line_buffer.clear();
        let bytes = self.reader.read_line(&mut self.line_buffer)?;
        if bytes == 0 {
            return Ok(None);
        }
        let first = self.bytes_read == 0;
        self.bytes_read += bytes as u64;

        let mut line = self.line_buffer.as_str();
        if first {
            line = line.strip_prefix('\u{FEFF}').unwrap_or(line);
        }
        line = line.strip_suffix('\n').unwrap_or(line);
        line = line.strip_suffix('\r').unwrap_or(line);
        Ok(Some(line.to_string()))
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        match self.sample.pop_front() {
            Some(line) => Ok(Some(line)),
            None => self.read_line(),
        }
    }
}

impl<R: BufRead> Iterator for TranscriptStream<R> {
    type Item = Result<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            let completed = match self.next_line() {
                Ok(Some(line)) => self.merger.push(&line),
                Ok(None) => {
                    self.finished = true;
                    self.merger.finish()
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            };

            let Some(logical) = completed else {
                continue;
            };

            match decode_message(&logical, self.days_first) {
                Ok(message) => return Some(Ok(message)),
                Err(e) if self.skip_invalid => {
                    warn!(error = %e, "skipping undecodable message");
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
