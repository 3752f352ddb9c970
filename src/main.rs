//! # wachat CLI
//!
//! Command-line interface for the wachat library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use wachat::cli::Args;
use wachat::core::apply_filters;
use wachat::format::write_to_format;
use wachat::parser::TranscriptParser;

fn main() {
    let args = <Args as ClapParser>::parse();
    init_logging(&args);

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the `-v` level.
fn init_logging(args: &Args) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> wachat::Result<()> {
    let total_start = Instant::now();
    let output_path = args.output_path();

    // Validate filters before touching the input
    let filter_config = args.filter_config()?;
    let transcript_config = args.transcript_config();
    let output_config = args.output_config();

    println!("📦 wachat v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {}", output_path);
    println!("📄 Format:  {}", args.format);
    match transcript_config.days_first {
        Some(true) => println!("📅 Dates:   day/month"),
        Some(false) => println!("📅 Dates:   month/day"),
        None => println!("📅 Dates:   auto-detect"),
    }
    if args.streaming {
        println!("🌊 Mode:    Streaming");
    }
    if let Some(ref after) = args.after {
        println!("📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        println!("📅 Before:  {}", before);
    }
    if let Some(ref from) = args.from {
        println!("👤 From:    {}", from);
    }
    println!();

    // Step 1: Parse
    println!("⏳ Parsing transcript...");
    let parse_start = Instant::now();
    let parser = TranscriptParser::with_config(transcript_config);
    let messages = parser.load(Path::new(&args.input))?;
    let original_count = messages.len();
    println!(
        "   Found {} messages ({:.2}s)",
        original_count,
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Filter
    let final_messages = if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        let filter_start = Instant::now();
        let filtered = apply_filters(messages, &filter_config);
        println!(
            "   {} messages after filtering ({:.2}s)",
            filtered.len(),
            filter_start.elapsed().as_secs_f64()
        );
        filtered
    } else {
        messages
    };

    // Step 3: Write
    println!("💾 Writing {}...", args.format);
    let write_start = Instant::now();
    write_to_format(&final_messages, &output_path, args.format, &output_config)?;
    println!("   Written in {:.2}s", write_start.elapsed().as_secs_f64());

    let total_time = total_start.elapsed();

    println!();
    println!("✅ Done! Output saved to {}", output_path);

    println!();
    println!("📊 Summary:");
    println!("   Parsed:    {} messages", original_count);
    if filter_config.is_active() {
        println!("   Filtered:  {} messages", final_messages.len());
    }
    let authors: std::collections::BTreeSet<_> = final_messages
        .iter()
        .filter(|m| !m.is_system())
        .map(|m| m.author.as_str())
        .collect();
    println!("   Authors:   {}", authors.len());

    println!();
    println!("⚡ Performance:");
    println!("   Total time:  {:.2}s", total_time.as_secs_f64());
    let msgs_per_sec = original_count as f64 / total_time.as_secs_f64();
    println!("   Throughput:  {:.0} messages/sec", msgs_per_sec);

    Ok(())
}
