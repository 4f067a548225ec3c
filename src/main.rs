use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use sector_miner::config::Config;
use sector_miner::corpus::loader::load_corpus;
use sector_miner::output::{json, terminal};
use sector_miner::pipeline;
use sector_miner::sectors::curate::CurationPolicy;
use sector_miner::sectors::extractor::PatternExtractor;
use sector_miner::sectors::traits::TokenExtractor;

/// Sector Miner: build a sector/theme taxonomy from fund display names.
///
/// Scans every fund name in the published fund list, counts the sector and
/// theme words it carries, merges synonyms, and writes a ranked candidate
/// list plus a curated top list.
#[derive(Parser)]
#[command(name = "sector-miner", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(clap::Args, Clone, Default)]
struct RunArgs {
    /// Fund list script to read (default: ./fundcode_search.js)
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Where to write the JSON report (default: ./sector-candidates.json)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Drop candidates seen fewer times than this (default: 2)
    #[arg(long, global = true)]
    min_count: Option<u64>,

    /// Also print the ranked detail table
    #[arg(long, global = true)]
    detail: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Mine the fund list and write the report (the default)
    Run,

    /// Show which tokens the extractor pulls from a single name
    Explain {
        /// The fund display name to analyze
        name: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Structured logging goes to stderr; stdout carries the summary
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("sector_miner=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Explain { name }) => {
            let extractor = PatternExtractor::new()?;
            let hits = extractor.extract(&name);
            terminal::display_explain(&name, &hits);
        }
        Some(Commands::Run) | None => run(cli.run)?,
    }

    Ok(())
}

fn run(args: RunArgs) -> Result<()> {
    let config = Config::load()?.with_overrides(args.input, args.output, args.min_count)?;

    info!(
        input = %config.input_path.display(),
        min_count = config.min_count,
        "Mining sector candidates"
    );

    // A malformed fund list aborts here, before anything is written
    let corpus = load_corpus(&config.input_path)?;

    let extractor = PatternExtractor::new()?;
    let policy = CurationPolicy::with_min_count(config.min_count);
    let mining = pipeline::mine(&extractor, corpus.names(), &policy, &config.source_label());

    let written = json::write_report(&mining.report, &config.output_path)?;

    if args.detail {
        terminal::display_detail(&mining.report);
    }
    terminal::display_summary(&mining.report, &mining.stats, corpus.skipped(), &written);

    if mining.candidates.is_empty() {
        println!(
            "{}",
            "No sector tokens were found. Is the input the right fund list?".yellow()
        );
    }

    Ok(())
}
