//! SALUS Advisory Engine — Demo CLI
//!
//! Exercises the three query operations against the built-in knowledge base
//! (or a knowledge TOML supplied with `--knowledge`).
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- symptom "I have a sore throat and a mild fever"
//!   cargo run -p demo -- region 320 96 640 480
//!   cargo run -p demo -- interactions warfarin aspirin
//!   cargo run -p demo -- --knowledge my-locale.toml symptom "hoofdpijn"

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use salus_contracts::advisory::Advisory;
use salus_contracts::error::SalusResult;
use salus_engine::{InteractionDetector, RegionLocator, SymptomMatcher};
use salus_knowledge::KnowledgeStore;

// ── CLI definition ────────────────────────────────────────────────────────────

/// SALUS — rule-based health-advisory engine demo.
///
/// Each subcommand runs one of the three engine operations and prints the
/// resulting advisory. None of this is medical advice; the knowledge base
/// is a small curated demonstration table.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "SALUS advisory engine demo",
    long_about = "Runs SALUS advisory queries: free-text symptom matching,\n\
                  body-diagram region lookup, and drug-interaction checks."
)]
struct Cli {
    /// Path to an alternative knowledge TOML (defaults to the built-in base).
    #[arg(long, global = true)]
    knowledge: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a sample of all three operations in sequence.
    RunAll,
    /// Match a free-text symptom description.
    Symptom {
        /// The symptom description (joined with spaces).
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Locate the body region under a tap at (X, Y) on a WIDTH x HEIGHT surface.
    Region {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    /// Check a drug list for known pairwise interactions.
    Interactions {
        /// Drug names (two or more for any rule to fire).
        #[arg(required = true)]
        drugs: Vec<String>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let result = run(&cli);
    if let Err(e) = result {
        eprintln!("Demo error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> SalusResult<()> {
    let store = match &cli.knowledge {
        Some(path) => KnowledgeStore::from_file(path)?,
        None => KnowledgeStore::builtin()?,
    };

    match &cli.command {
        Command::RunAll => run_all(&store),
        Command::Symptom { text } => {
            let advisory = SymptomMatcher::new(&store).match_text(&text.join(" "));
            print_advisory(&advisory);
            Ok(())
        }
        Command::Region { x, y, width, height } => {
            match RegionLocator::new(&store).advise(*x, *y, *width, *height)? {
                Some(advisory) => print_advisory(&advisory),
                None => println!("  No region under that tap."),
            }
            Ok(())
        }
        Command::Interactions { drugs } => {
            match InteractionDetector::new(&store).advise(drugs) {
                Some(advisory) => print_advisory(&advisory),
                None => println!("  No known interactions for that drug list."),
            }
            Ok(())
        }
    }
}

// ── Walkthrough ───────────────────────────────────────────────────────────────

fn run_all(store: &KnowledgeStore) -> SalusResult<()> {
    println!();
    println!("SALUS — Rule-Based Health Advisory Engine");
    println!("=========================================");
    println!();

    println!("[1] Symptom matcher: \"I have a severe chest pain and can't breathe\"");
    print_advisory(
        &SymptomMatcher::new(store).match_text("I have a severe chest pain and can't breathe"),
    );
    println!();

    println!("[2] Symptom matcher fallback: \"feeling a bit off lately\"");
    print_advisory(&SymptomMatcher::new(store).match_text("feeling a bit off lately"));
    println!();

    println!("[3] Region locator: tap (320, 96) on a 640x480 diagram");
    match RegionLocator::new(store).advise(320.0, 96.0, 640.0, 480.0)? {
        Some(advisory) => print_advisory(&advisory),
        None => println!("  No region under that tap."),
    }
    println!();

    println!("[4] Interaction detector: warfarin + aspirin + clopidogrel");
    match InteractionDetector::new(store).advise(&["warfarin", "aspirin", "clopidogrel"]) {
        Some(advisory) => print_advisory(&advisory),
        None => println!("  No known interactions for that drug list."),
    }
    println!();

    println!("All queries completed.");
    Ok(())
}

// ── Output formatting ─────────────────────────────────────────────────────────

fn print_advisory(advisory: &Advisory) {
    println!("  Advisory:  {}", advisory.label);
    println!("  Severity:  {}", advisory.severity);
    println!("  Detail:    {}", advisory.detail);
    println!(
        "  Escalate:  {}",
        if advisory.escalate { "yes — see a professional" } else { "no" }
    );
    // Full structured record for integrators.
    match serde_json::to_string_pretty(advisory) {
        Ok(json) => println!("  Payload:\n{}", indent(&json, 4)),
        Err(e) => println!("  Payload:   <serialization failed: {}>", e),
    }
}

fn indent(text: &str, spaces: usize) -> String {
    let pad = " ".repeat(spaces);
    text.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
