// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use crate::config::consts::{BASE_URL, OUTPUT_FILE, TIMEOUT_SECS};
use crate::config::options::ScrapeOptions;
use crate::data::{ManagementType, ScrapeResult, MANAGEMENT_TYPES};
use crate::error::{OutputError, SkipReason};
use crate::progress::Progress;
use crate::summary::{self, CategoryGroup};
use crate::{file, scrape};

#[derive(Debug, Parser)]
#[command(name = "roster_scrape", version, about = "Scrape Samanwaya roster statistics into one JSON file")]
pub struct Cli {
    /// Defaults to `scrape` with default options.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch every management's report and write the output file
    Scrape(ScrapeArgs),
    /// Print roster totals from a previously written output file
    Summary(SummaryArgs),
}

#[derive(Debug, Args)]
pub struct ScrapeArgs {
    /// Publicview base URL
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Output JSON path (overwritten)
    #[arg(short, long, default_value = OUTPUT_FILE)]
    pub out: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,

    /// Management type code to scrape (repeatable; default: all)
    #[arg(long = "type", value_name = "CODE", value_parser = parse_type)]
    pub types: Vec<ManagementType>,
}

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Output file written by `scrape`
    #[arg(short, long, default_value = OUTPUT_FILE)]
    pub input: PathBuf,

    /// Category group to total
    #[arg(long, value_enum, default_value_t = CategoryGroup::All)]
    pub filter: CategoryGroup,

    /// Also print the per-category card for this management (exact name)
    #[arg(long, value_name = "NAME")]
    pub management: Option<String>,
}

impl From<ScrapeArgs> for ScrapeOptions {
    fn from(a: ScrapeArgs) -> Self {
        Self {
            base_url: a.base_url,
            out_path: a.out,
            timeout: Duration::from_secs(a.timeout),
            types: if a.types.is_empty() { MANAGEMENT_TYPES.to_vec() } else { a.types },
        }
    }
}

fn parse_type(s: &str) -> Result<ManagementType, String> {
    ManagementType::from_code(s).ok_or_else(|| {
        let known: Vec<_> = MANAGEMENT_TYPES.iter().map(|t| t.code).collect();
        format!("unknown management type {s:?} (expected one of {})", known.join(", "))
    })
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("could not read {}: {source}", .path.display())]
    Input { path: PathBuf, source: OutputError },

    #[error("no management named {0:?} in the input")]
    UnknownManagement(String),
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        None => run_scrape(ScrapeOptions::default()),
        Some(Command::Scrape(args)) => run_scrape(args.into()),
        Some(Command::Summary(args)) => run_summary(&args),
    }
}

fn run_scrape(options: ScrapeOptions) -> Result<(), CliError> {
    let mut console = ConsoleProgress;
    scrape::run(&options, Some(&mut console))?;
    Ok(())
}

fn run_summary(args: &SummaryArgs) -> Result<(), CliError> {
    let records = file::read_records(&args.input).map_err(|source| CliError::Input {
        path: args.input.clone(),
        source,
    })?;

    let totals = summary::summarize(&records, args.filter);
    println!("--- Roster summary ({:?}) ---", args.filter);
    println!("{totals}");

    if let Some(name) = &args.management {
        let rec = summary::find_management(&records, name)
            .ok_or_else(|| CliError::UnknownManagement(name.clone()))?;
        println!("\n--- {} ({}) ---", rec.name_of_management, rec.type_of_management);
        let lines = summary::management_card(rec);
        let totals = summary::card_totals(&lines);
        println!("Verified: {} / {}", rec.verf_status.verified, rec.verf_status.total);
        println!(
            "Owed: {:.2}  Filled: {}  Not approved: {}  Vacant: {}",
            totals.owed, totals.filled, totals.not_approved, totals.vacant
        );
        println!(
            "{:<20} {:>8} {:>7} {:>8} {:>10} {:>7} {:>12}",
            "Category", "Owed", "Filled", "Backlog", "Unreported", "Vacant", "Not approved"
        );
        for line in &lines {
            println!(
                "{:<20} {:>8.2} {:>7} {:>8.2} {:>10.2} {:>7} {:>12}",
                line.name, line.owed, line.filled, line.backlog, line.unreported, line.vacant, line.not_approved
            );
        }
    }
    Ok(())
}

/// Prints per-type banners, one line per listing, and the final skip list to stdout.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin_type(&mut self, kind: &ManagementType, total: usize) {
        println!("\n--- Fetching management list for type: {kind} ---");
        println!("  Found {total} managements.");
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_begin(&mut self, pos: usize, total: usize, label: &str, id: Option<&str>) {
        print!("  ({pos}/{total}) Scraping: {label} (ID: {})", id.unwrap_or("none"));
        let _ = io::stdout().flush();
    }

    fn item_done(&mut self, _label: &str) {
        println!(" ... Done");
    }

    fn item_skipped(&mut self, _label: &str, reason: &SkipReason) {
        println!("\n      [SKIP] {reason}");
    }

    fn finish(&mut self, result: &ScrapeResult) {
        if result.skips.is_empty() {
            return;
        }
        println!("\n--- Skipped {} items (due to errors or no data) ---", result.skips.len());
        for skip in &result.skips {
            println!("- {skip}");
        }
    }
}
