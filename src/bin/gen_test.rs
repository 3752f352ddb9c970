//! Synthetic transcript generator for stress testing wachat.
//!
//! Usage: cargo run --bin gen_test --features gen-test -- [messages] [output] [style]
//! Example: cargo run --bin gen_test --features gen-test -- 100000 heavy_chat.txt bracketed
//!
//! Styles: dashed (Android, day first), us (Android, month first with a.m./p.m.),
//! bracketed (iOS), dotted (German), mixed.

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;

const EMOJIS: &[&str] = &[
    "😀", "😂", "😍", "🤔", "🙄", "😱", "💀", "🦄", "🌈", "⚡", "🔥", "👍", "❤️", "🏳️‍🌈",
    "🇰🇿", "👨‍👩‍👧‍👦", "🤷‍♀️",
];

const AUTHORS: &[&str] = &[
    "Alice",
    "Bob Smith",
    "Иван Петров",
    "村上 春樹",
    "محمد",
    "User;With;Semicolons",
    "User \"Quoted\"",
    "🔥FireUser🔥",
    "+1 555 0100",
    "\u{202A}+49 151 2345678\u{202C}",
];

const SYSTEM_NOTICES: &[&str] = &[
    "Messages and calls are end-to-end encrypted. No one outside of this chat can read them.",
    "Alice created group \"Stress test\"",
    "Bob Smith added Иван Петров",
    "Иван Петров left",
    "You changed this group's icon",
];

#[derive(Clone, Copy)]
enum Style {
    Dashed,
    Us,
    Bracketed,
    Dotted,
}

impl Style {
    fn parse(name: &str) -> Option<Vec<Style>> {
        match name {
            "dashed" | "android" => Some(vec![Style::Dashed]),
            "us" => Some(vec![Style::Us]),
            "bracketed" | "ios" => Some(vec![Style::Bracketed]),
            "dotted" | "de" => Some(vec![Style::Dotted]),
            "mixed" => Some(vec![Style::Dashed, Style::Bracketed, Style::Dotted]),
            _ => None,
        }
    }

    /// Header prefix for the i-th message, up to and including the separator
    /// before the author.
    fn header(self, i: usize) -> String {
        let day = (i / 1440) % 28 + 1;
        let month = (i / 40_320) % 12 + 1;
        let hour = (i / 60) % 24;
        let minute = i % 60;
        match self {
            Style::Dashed => format!("{day:02}/{month:02}/2024, {hour:02}:{minute:02} - "),
            Style::Us => {
                let (h12, meridiem) = match hour {
                    0 => (12, "a.m."),
                    1..=11 => (hour, "a.m."),
                    12 => (12, "p.m."),
                    _ => (hour - 12, "p.m."),
                };
                format!("{month}/{day}/24, {h12}:{minute:02} {meridiem} - ")
            }
            Style::Bracketed => {
                format!("[{day:02}.{month:02}.24, {hour:02}:{minute:02}:{:02}] ", i % 60)
            }
            Style::Dotted => format!("{day:02}.{month:02}.24, {hour:02}:{minute:02} - "),
        }
    }
}

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let count: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100_000);
    let output = args.get(2).map(|s| s.as_str()).unwrap_or("heavy_chat.txt");
    let style_name = args.get(3).map(|s| s.as_str()).unwrap_or("mixed");

    let Some(styles) = Style::parse(style_name) else {
        eprintln!(
            "Unknown style: {}. Use 'dashed', 'us', 'bracketed', 'dotted' or 'mixed'",
            style_name
        );
        process::exit(1);
    };

    println!("🧪 Transcript Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Messages: {}", count);
    println!("   Output:   {}", output);
    println!("   Style:    {}", style_name);
    println!();

    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file);
    let mut rng = rand::thread_rng();
    let start = Instant::now();
    let mut bytes_written: usize = 0;

    for i in 0..count {
        // Each block of messages keeps one style so the day/month order
        // stays consistent within a run.
        let style = styles[(i / 1000) % styles.len()];
        let header = style.header(i);

        let line = if i % 50 == 0 {
            let notice = SYSTEM_NOTICES.choose(&mut rng).copied().unwrap_or_default();
            format!("{header}{notice}\n")
        } else {
            let author = AUTHORS.choose(&mut rng).copied().unwrap_or("Alice");
            let body = generate_body(&mut rng, i);
            format!("{header}{author}: {body}\n")
        };

        bytes_written += line.len();
        writer.write_all(line.as_bytes())?;

        // Stray lines join the previous message; impossible dates get skipped
        if i % 1000 == 500 {
            let stray = generate_stray_line(&mut rng);
            bytes_written += stray.len();
            writer.write_all(stray.as_bytes())?;
        }

        if (i + 1) % 10000 == 0 {
            let elapsed = start.elapsed().as_secs_f64();
            let mps = (i + 1) as f64 / elapsed;
            let mb = bytes_written as f64 / 1_000_000.0;
            eprint!(
                "\r   Generated {}/{} ({:.1} MB, {:.0} msg/s)",
                i + 1,
                count,
                mb,
                mps
            );
        }
    }

    writer.flush()?;

    let elapsed = start.elapsed();
    let mb = bytes_written as f64 / 1_000_000.0;

    println!("\n\n✅ Done!");
    println!("   Size: {:.2} MB", mb);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
    println!("   Speed: {:.0} msg/s", count as f64 / elapsed.as_secs_f64());

    Ok(())
}

fn generate_body(rng: &mut impl Rng, index: usize) -> String {
    match index % 16 {
        0..=5 => format!("Normal message #{} with some text", index),

        // Continuation lines
        6 => format!("First line #{}\nsecond line\n\nfourth line after a blank", index),

        // Markup
        7 => format!("*bold* _italic_ ~strike~ ```mono``` #{}", index),
        8 => format!("see https://example.com/{} or www.example.org", index),

        // Emoji spam
        9 => {
            let emojis: String = (0..50)
                .filter_map(|_| EMOJIS.choose(rng).copied())
                .collect::<Vec<_>>()
                .join("");
            format!("Emoji spam: {} #{}", emojis, index)
        }

        10 => "<Media omitted>".to_string(),
        11 => format!("IMG-2024{:04}-WA0001.jpg (file attached)", index % 10_000),

        // Giant message
        12 => {
            let size = rng.gen_range(10_000..50_000);
            format!("Giant message #{}: {}", index, "X".repeat(size))
        }

        // Colons in the body
        13 => format!("Meet at 10:30: room {}", index),
        14 => format!("Mixed: Hello Привет 你好 🌍 #{}", index),
        _ => String::new(),
    }
}

fn generate_stray_line(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..4) {
        0 => "This line has no timestamp or author\n".to_string(),
        1 => "32/13/2024, 99:99 - looks like a header\n".to_string(),
        2 => "-------------------------------------------\n".to_string(),
        _ => "\n".to_string(),
    }
}
