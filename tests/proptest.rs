//! Property-based tests for wachat.
//!
//! These tests generate random transcripts to find edge cases.

use proptest::prelude::*;

use wachat::ParseOptions;
use wachat::initials::compute_initials;
use wachat::markup::{MEDIA_OMITTED, MEDIA_OMITTED_LABEL, htmlify_message};
use wachat::parsing::{
    LineMerger, make_logical_messages, parse_messages, parse_transcript, try_parse_messages,
};

/// A header line in one of a few common shapes, always day-first.
fn arb_header() -> impl Strategy<Value = String> {
    (1u32..=28, 1u32..=12, 0u32..24, 0u32..60, 0usize..3).prop_map(|(d, m, h, mi, style)| {
        match style {
            0 => format!("{d:02}/{m:02}/2020, {h:02}:{mi:02} - "),
            1 => format!("[{d:02}.{m:02}.20, {h:02}:{mi:02}:00] "),
            _ => format!("{d}-{m}-2020 {h:02}:{mi:02} - "),
        }
    })
}

/// Continuation text that can never look like a header.
fn arb_continuation() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        String::new(),
        "plain text".to_string(),
        "   indented".to_string(),
        "Привет мир".to_string(),
        "🎉🔥💀 emoji".to_string(),
        "no: header here".to_string(),
        "- dash first".to_string(),
    ])
}

fn arb_author() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Alice".to_string(),
        "Bob Smith".to_string(),
        "Иван".to_string(),
        "+1 555 0100".to_string(),
        "User;With;Semicolons".to_string(),
    ])
}

/// One logical message as raw lines, with its expected author.
fn arb_entry() -> impl Strategy<Value = (Vec<String>, Option<String>)> {
    (
        arb_header(),
        prop::option::of(arb_author()),
        prop::collection::vec(arb_continuation(), 0..4),
    )
        .prop_map(|(header, author, more)| {
            let first = match author {
                Some(ref a) => format!("{header}{a}: hello"),
                None => format!("{header}Alice joined using this group's invite link"),
            };
            let mut lines = vec![first];
            lines.extend(more);
            (lines, author)
        })
}

/// Markup fragments mixed with the media placeholder.
fn arb_markup_piece() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        MEDIA_OMITTED.to_string(),
        "*bold*".to_string(),
        "_italic_".to_string(),
        "~strike~".to_string(),
        "*".to_string(),
        "_".to_string(),
        "~".to_string(),
        "```mono```".to_string(),
        "https://example.com/a_b".to_string(),
        "www.example.org".to_string(),
        "plain".to_string(),
    ])
}

fn arb_transcript() -> impl Strategy<Value = Vec<(Vec<String>, Option<String>)>> {
    prop::collection::vec(arb_entry(), 0..30)
}

proptest! {
    #[test]
    fn prop_merging_accounts_for_every_line(entries in arb_transcript()) {
        let lines: Vec<String> = entries.iter().flat_map(|(l, _)| l.clone()).collect();
        let logical = make_logical_messages(&lines);

        prop_assert_eq!(logical.len(), entries.len());
        let total: usize = logical.iter().map(|m| m.line_count()).sum();
        prop_assert_eq!(total, lines.len());
    }

    #[test]
    fn prop_every_entry_decodes(entries in arb_transcript()) {
        let lines: Vec<String> = entries.iter().flat_map(|(l, _)| l.clone()).collect();
        let result = parse_messages(&make_logical_messages(&lines), &ParseOptions::days_first());

        prop_assert_eq!(result.len(), entries.len());
        for (msg, (_, author)) in result.iter().zip(&entries) {
            match author {
                Some(a) => prop_assert_eq!(&msg.author, a),
                None => prop_assert!(msg.is_system()),
            }
        }
    }

    #[test]
    fn prop_orphans_before_first_header_are_counted(
        orphans in prop::collection::vec(arb_continuation(), 0..5),
        entries in arb_transcript(),
    ) {
        let mut merger = LineMerger::new();
        let mut count = 0;
        for line in orphans.iter().chain(entries.iter().flat_map(|(l, _)| l)) {
            count += usize::from(merger.push(line).is_some());
        }
        count += usize::from(merger.finish().is_some());

        prop_assert_eq!(count, entries.len());
        prop_assert_eq!(merger.dropped(), orphans.len());
    }

    #[test]
    fn prop_explicit_order_matches_strict_parse(entries in arb_transcript()) {
        let lines: Vec<String> = entries.iter().flat_map(|(l, _)| l.clone()).collect();
        let logical = make_logical_messages(&lines);
        let options = ParseOptions::days_first();

        let lenient = parse_messages(&logical, &options);
        let strict = try_parse_messages(&logical, &options).unwrap();
        prop_assert_eq!(lenient, strict);
    }

    #[test]
    fn prop_reparse_is_stable(entries in arb_transcript()) {
        let txt = entries
            .iter()
            .flat_map(|(l, _)| l.clone())
            .collect::<Vec<_>>()
            .join("\n");
        let first = parse_transcript(&txt, &ParseOptions::new());
        let second = parse_transcript(&txt, &ParseOptions::new());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_parse_never_panics(s in "\\PC{0,200}") {
        let _ = parse_transcript(&s, &ParseOptions::new());
    }

    #[test]
    fn prop_phone_numbers_get_sentinel(digits in "[0-9 ]{1,15}") {
        prop_assert_eq!(compute_initials(&format!("+{digits}")), "#");
    }

    #[test]
    fn prop_initials_one_char_per_token(words in prop::collection::vec("[a-zA-Z]{1,8}", 0..5)) {
        let name = words.join(" ");
        let initials = compute_initials(&name);
        prop_assert_eq!(initials.chars().count(), words.len());
    }

    #[test]
    fn prop_media_placeholder_always_replaced(
        pieces in prop::collection::vec(arb_markup_piece(), 1..12),
        glue in prop::sample::select(vec!["", " ", "\n"]),
    ) {
        let placeholders = pieces.iter().filter(|p| p.as_str() == MEDIA_OMITTED).count();
        let html = htmlify_message(&pieces.join(glue));
        prop_assert!(!html.contains(MEDIA_OMITTED));
        prop_assert_eq!(html.matches(MEDIA_OMITTED_LABEL).count(), placeholders);
    }

    #[test]
    fn prop_plain_text_unchanged(s in "[a-zA-Z0-9 ,!?]{0,100}") {
        prop_assert_eq!(htmlify_message(&s), s);
    }
}
