//! Renders message bodies as decorated HTML-ish strings.
//!
//! WhatsApp's inline formatting (`*bold*`, `_italic_`, `~strike~`,
//! ```` ```mono``` ````) becomes HTML tags, links and e-mail addresses become
//! anchors, attached pictures become `<img>` tags and the `<Media omitted>`
//! placeholder becomes plain text.
//!
//! Text already turned into markup is not scanned again: a `_` inside a URL
//! or inside a monospace span stays a `_`.
//!
//! ```
//! use wachat::markup::htmlify_message;
//!
//! assert_eq!(htmlify_message("*hi* there"), "<b>hi</b> there");
//! assert_eq!(htmlify_message("<Media omitted>"), "Media omitted");
//! ```

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// The placeholder WhatsApp writes for media left out of the export.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// What [`MEDIA_OMITTED`] is rendered as.
pub const MEDIA_OMITTED_LABEL: &str = "Media omitted";

static ATTACHMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<file>[\w-]+\.(?i:jpe?g|png|gif|webp)) \((?:file attached|Datei angehängt)\)",
    )
    .unwrap()
});

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)\b(?:(?P<url>(?:https?://|www\.)[^\s<>"]*[^\s<>"'.,;:!?)\]*_~])|(?P<email>[a-z0-9._%+-]+@[a-z0-9-]+(?:\.[a-z0-9-]+)*\.[a-z]{2,}))"#,
    )
    .unwrap()
});

static MONOSPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<pre>^|[\s(\[{>"'])(?P<m>```(?P<inner>[^\n]+?)```)"#).unwrap()
});

static STRIKE: LazyLock<Regex> = LazyLock::new(|| emphasis("~"));
static BOLD: LazyLock<Regex> = LazyLock::new(|| emphasis("*"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| emphasis("_"));

/// `marker inner marker`, opening at a boundary, no spaces just inside the
/// markers, on a single line.
fn emphasis(marker: &str) -> Regex {
    let m = regex::escape(marker);
    Regex::new(&format!(
        r#"(?P<pre>^|[\s(\[{{>"'])(?:{m})(?P<inner>[^\s{m}](?:[^{m}\n]*?[^\s{m}])?)(?:{m})"#
    ))
    .unwrap()
}

#[derive(Debug)]
enum Segment {
    /// Still subject to formatting.
    Text(String),
    /// Finished markup.
    Markup(String),
}

/// Replaces every match inside text segments with a markup segment.
///
/// The replaced span is the `m` group if the regex has one, else the whole
/// match.
fn lift<F>(segments: Vec<Segment>, regex: &Regex, render: F) -> Vec<Segment>
where
    F: Fn(&Captures<'_>) -> String,
{
    let mut out = Vec::with_capacity(segments.len());
    for segment in segments {
        let Segment::Text(text) = segment else {
            out.push(segment);
            continue;
        };

        let mut last = 0;
        for caps in regex.captures_iter(&text) {
            let Some(span) = caps.name("m").or_else(|| caps.get(0)) else {
                continue;
            };
            if span.start() > last {
                out.push(Segment::Text(text[last..span.start()].to_string()));
            }
            out.push(Segment::Markup(render(&caps)));
            last = span.end();
        }
        if last < text.len() {
            out.push(Segment::Text(text[last..].to_string()));
        }
    }
    out
}

fn render_attachment(caps: &Captures<'_>) -> String {
    format!("<img src={} />", &caps["file"])
}

fn render_link(caps: &Captures<'_>) -> String {
    let text = &caps[0];
    let href = match caps.name("url") {
        Some(url) => {
            let url = url.as_str();
            if url.get(..4).is_some_and(|p| p.eq_ignore_ascii_case("www.")) {
                format!("http://{url}")
            } else {
                url.to_string()
            }
        }
        None => format!("mailto:{text}"),
    };
    format!(r#"<a href="{href}" target="_blank" rel="noopener noreferrer">{text}</a>"#)
}

fn render_monospace(caps: &Captures<'_>) -> String {
    format!("<tt>{}</tt>", &caps["inner"])
}

fn emphasize(text: &str) -> String {
    let text = STRIKE.replace_all(text, "${pre}<s>${inner}</s>");
    let text = BOLD.replace_all(&text, "${pre}<b>${inner}</b>");
    ITALIC
        .replace_all(&text, "${pre}<i>${inner}</i>")
        .into_owned()
}

/// Converts a message body into its decorated form.
///
/// Steps, in order: attached pictures, links, monospace, then strikethrough,
/// bold and italic, and finally the media placeholder.
///
/// # Examples
///
/// ```
/// use wachat::markup::htmlify_message;
///
/// assert_eq!(
///     htmlify_message("see www.example.com"),
///     r#"see <a href="http://www.example.com" target="_blank" rel="noopener noreferrer">www.example.com</a>"#
/// );
/// assert_eq!(htmlify_message("```a_b_c```"), "<tt>a_b_c</tt>");
/// ```
pub fn htmlify_message(message: &str) -> String {
    let segments = vec![Segment::Text(message.to_string())];
    let segments = lift(segments, &ATTACHMENT, render_attachment);
    let segments = lift(segments, &LINK, render_link);
    let segments = lift(segments, &MONOSPACE, render_monospace);

    let mut html = String::with_capacity(message.len() + 16);
    for segment in segments {
        match segment {
            Segment::Text(text) => html.push_str(&emphasize(&text)),
            Segment::Markup(markup) => html.push_str(&markup),
        }
    }

    html.replace(MEDIA_OMITTED, MEDIA_OMITTED_LABEL)
}
