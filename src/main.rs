//! Interactive shell over the name directory.
//!
//! Loads the delimited source file, dumps the sorted directory, then reads
//! one query per line until `exit`. Presentation lives here; the library
//! only returns data.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::json;
use tracing_subscriber::EnvFilter;

use namedir::{
    Directory, MatchResult, ParsedQuery, QueryError, RunConfig, load_entries, match_query,
    parse_query,
};

/// Interactive hashed lookup over a delimited name directory.
#[derive(Parser, Debug)]
#[command(name = "namedir", version, about = "Hashed personal-name directory lookup")]
struct Args {
    /// Path to the delimited source file; overrides the config value.
    #[arg(value_name = "DATABASE")]
    database: Option<PathBuf>,

    /// YAML run configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print per-query results as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Skip the startup table dump.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match args.config.as_deref() {
        Some(path) => RunConfig::load_from_path(path)?,
        None => RunConfig::default(),
    };

    let database = args
        .database
        .unwrap_or_else(|| PathBuf::from(&config.database.path));
    let entries = load_entries(&database, config.delimiter_char())?;
    let directory = Directory::from_entries(entries);

    if config.display.dump_table && !args.quiet && !args.json {
        print_table(&directory, config.display.max_rows);
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\nquery (or 'exit'): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let query = line.trim();
        if query == "exit" {
            break;
        }
        if query.is_empty() {
            continue;
        }

        match parse_query(query) {
            Ok(parsed) => {
                let result = match_query(&directory, &parsed);
                if args.json {
                    print_json(query, &parsed, &result)?;
                } else {
                    print_result(query, &parsed, &result);
                }
            }
            Err(QueryError::InvalidFormat) => {
                println!("Unrecognized query format. Use either:");
                println!("  - a full name:  Smith John Paul");
                println!("  - a short form: Smith J.P.  (or Smith J.P)");
            }
        }
    }

    println!("Done.");
    Ok(())
}

fn print_table(directory: &Directory, max_rows: usize) {
    println!(
        "{:<35} {:<25} {:>12} {:>12}",
        "Full name", "Short name", "Full hash", "Short hash"
    );
    println!("{}", "-".repeat(87));

    let shown = if max_rows == 0 {
        directory.len()
    } else {
        max_rows.min(directory.len())
    };
    for record in directory.iter().take(shown) {
        println!(
            "{:<35} {:<25} {:>12} {:>12}",
            record.full_name, record.short_name, record.full_hash, record.short_hash
        );
    }
    if shown < directory.len() {
        println!("... {} more", directory.len() - shown);
    }
    println!("{} records", directory.len());
}

fn print_result(query: &str, parsed: &ParsedQuery, result: &MatchResult) {
    println!("\n=== Search results ===");
    println!("Query: {query}");
    println!("Form:  {}", if parsed.is_short_form { "short" } else { "full" });
    println!("Hash:  {}", parsed.hash);

    if result.matches.is_empty() {
        println!("No matches.");
    } else {
        println!("Matches: {}", result.matches.len());
        for record in &result.matches {
            println!("----------------------------------------");
            println!("Full name:  {}", record.full_name);
            println!("Short name: {}", record.short_name);
            println!("Full hash:  {}", record.full_hash);
            println!("Short hash: {}", record.short_hash);
        }
    }

    println!("\nStatistics:");
    println!("  hash comparisons:   {}", result.hash_comparisons);
    println!("  string comparisons: {}", result.string_comparisons);
}

fn print_json(
    query: &str,
    parsed: &ParsedQuery,
    result: &MatchResult,
) -> Result<(), serde_json::Error> {
    let value = json!({
        "query": query,
        "short_form": parsed.is_short_form,
        "canonical": parsed.canonical,
        "hash": parsed.hash,
        "matches": result.matches,
        "hash_comparisons": result.hash_comparisons,
        "string_comparisons": result.string_comparisons,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
