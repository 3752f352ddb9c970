//! Timestamp signatures of WhatsApp header lines.
//!
//! Exports differ by platform, locale and app version. Every variant seen in
//! the wild falls into one of three families:
//!
//! | Family | Example |
//! |--------|---------|
//! | [`Dashed`](SignatureFamily::Dashed) | `23/06/2018, 01:55 p.m. - Loris: one` |
//! | [`ColonTerminated`](SignatureFamily::ColonTerminated) | `13.06.18 21.25.15: Alice: hi` |
//! | [`Bracketed`](SignatureFamily::Bracketed) | `[03.13.18 21:25:15] Alice: hi` |
//!
//! The table is ordered and the first matching family wins. Merging and
//! decoding both go through [`match_header`], so a line is a header for the
//! merger exactly when the decoder can read its timestamp prefix.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// LRM/RLM marks some exports put in front of the timestamp.
const MARKS: &str = r"^[\u{200E}\u{200F}]*";

/// Three numeric components separated by `/`, `-` or `.`.
const DATE: &str = r"(?P<d1>[0-9]{1,4})[-/.] ?(?P<d2>[0-9]{1,4})[-/.] ?(?P<d3>[0-9]{1,4})";

/// Between date and time: `,`, `, `, a single space, or nothing.
const GAP: &str = r",? ?";

const TIME: &str = r"(?P<hour>[0-9]{1,2})[.:](?P<minute>[0-9]{2})(?:[.:](?P<second>[0-9]{2}))?";

/// `am`, `PM`, `a.m.`, `p. m.`; optionally after a (narrow) no-break space.
const MERIDIEM: &str = r"(?:[ \u{202F}\u{00A0}]?(?P<meridiem>(?i:[ap]\.? ?m\.?)))?";

/// Timestamp signature family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureFamily {
    /// `date, time - rest` (Android, most locales)
    Dashed,
    /// `date time: rest`
    ColonTerminated,
    /// `[date time] rest` (iOS)
    Bracketed,
}

impl SignatureFamily {
    /// Returns the families in match order.
    pub fn all() -> &'static [SignatureFamily] {
        &[
            SignatureFamily::Dashed,
            SignatureFamily::ColonTerminated,
            SignatureFamily::Bracketed,
        ]
    }

    /// Returns the regex source for this family.
    pub fn pattern(self) -> String {
        match self {
            SignatureFamily::Dashed => {
                format!(r"{MARKS}{DATE}{GAP}{TIME}{MERIDIEM}\s-\s?(?P<rest>.*)$")
            }
            SignatureFamily::ColonTerminated => {
                format!(r"{MARKS}{DATE}{GAP}{TIME}{MERIDIEM}: (?P<rest>.*)$")
            }
            SignatureFamily::Bracketed => {
                format!(r"{MARKS}\[{DATE}{GAP}{TIME}{MERIDIEM}\](?: -|:)? ?(?P<rest>.*)$")
            }
        }
    }
}

struct Signature {
    family: SignatureFamily,
    regex: Regex,
}

impl Signature {
    fn new(family: SignatureFamily) -> Self {
        Self {
            family,
            regex: Regex::new(&family.pattern()).unwrap(),
        }
    }
}

static SIGNATURES: LazyLock<Vec<Signature>> = LazyLock::new(|| {
    SignatureFamily::all()
        .iter()
        .map(|&family| Signature::new(family))
        .collect()
});

/// `<author>:` followed by a space and the body, or by nothing at all.
static AUTHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<author>.+?):(?: (?P<body>.*)|$)").unwrap());

/// The pieces of a header line, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch<'a> {
    /// Which signature matched.
    pub family: SignatureFamily,
    /// The three numeric date components, in written order.
    pub date: [&'a str; 3],
    pub hour: &'a str,
    pub minute: &'a str,
    pub second: Option<&'a str>,
    /// Raw meridiem text (`p.m.`, `AM`, ...), if any.
    pub meridiem: Option<&'a str>,
    /// Byte length of the timestamp prefix; `rest` starts here.
    pub prefix_len: usize,
    /// Everything after the timestamp prefix.
    pub rest: &'a str,
}

impl<'a> HeaderMatch<'a> {
    fn from_captures(family: SignatureFamily, caps: &Captures<'a>) -> Option<Self> {
        let rest = caps.name("rest")?;
        Some(Self {
            family,
            date: [
                caps.name("d1")?.as_str(),
                caps.name("d2")?.as_str(),
                caps.name("d3")?.as_str(),
            ],
            hour: caps.name("hour")?.as_str(),
            minute: caps.name("minute")?.as_str(),
            second: caps.name("second").map(|m| m.as_str()),
            meridiem: caps.name("meridiem").map(|m| m.as_str()),
            prefix_len: rest.start(),
            rest: rest.as_str(),
        })
    }
}

/// Matches a single line against the signature table.
///
/// Returns `None` for continuation lines. `line` must not contain `\n`.
pub fn match_header(line: &str) -> Option<HeaderMatch<'_>> {
    SIGNATURES.iter().find_map(|signature| {
        let caps = signature.regex.captures(line)?;
        HeaderMatch::from_captures(signature.family, &caps)
    })
}

/// Returns `true` if the line opens a new logical message.
pub fn is_header_line(line: &str) -> bool {
    SIGNATURES.iter().any(|s| s.regex.is_match(line))
}

/// Splits a header remainder into `(author, body)`.
///
/// The author ends at the first `": "`, or at a trailing `:`. Returns `None`
/// when there is no such boundary or the author would be blank.
pub fn split_author(rest: &str) -> Option<(&str, &str)> {
    let caps = AUTHOR.captures(rest)?;
    let author = caps.name("author")?.as_str();
    if author.trim().is_empty() {
        return None;
    }
    let body = caps.name("body").map_or("", |m| m.as_str());
    Some((author, body))
}
