//! cbgen CLI
//!
//! Fetches Adblock Plus filter lists and compiles them into per-category
//! WebKit content-blocker JSON artifacts.

mod fetch;
mod output;
mod sources;

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use cb_compiler::{aggregate, append_source};
use cb_core::types::{Category, RuleSet};

use crate::fetch::Fetcher;
use crate::sources::Registry;

#[derive(Parser)]
#[command(name = "cb-cli")]
#[command(about = "Adblock filter list to WebKit content-blocker compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the configured sources and write one JSON artifact per category
    Update {
        /// Output directory for the generated artifacts
        #[arg(short, long, default_value = "out")]
        output: PathBuf,

        /// Restrict the run to the given categories
        #[arg(short, long)]
        category: Vec<Category>,

        /// Per-source reporting
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compile local filter-list files into one JSON artifact
    Compile {
        /// Input filter-list files
        #[arg(short, long, required = true)]
        input: Vec<String>,

        /// Output rule file
        #[arg(short, long, default_value = "rules.json")]
        output: PathBuf,

        /// Per-source reporting
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate a generated rule file
    Validate {
        /// Rule file to check
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Update {
            output,
            category,
            verbose,
        } => cmd_update(&Registry::default_sources(), &output, &category, verbose).await,
        Commands::Compile {
            input,
            output,
            verbose,
        } => cmd_compile(&input, &output, verbose),
        Commands::Validate { input } => cmd_validate(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn cmd_update(
    registry: &Registry,
    output: &Path,
    only: &[Category],
    verbose: bool,
) -> Result<(), String> {
    if registry.is_empty() {
        return Err("No categories configured".to_string());
    }

    let fetcher = Fetcher::new().map_err(|e| format!("Failed to create HTTP client: {e}"))?;

    for (category, urls) in registry.iter() {
        if !only.is_empty() && !only.contains(&category) {
            continue;
        }

        println!("Processing category: {category}...");

        let mut rules = RuleSet::new();
        for url in urls {
            // A source that fails to fetch contributes zero rules; the run
            // carries on with the remaining sources and categories.
            let text = match fetcher.fetch_text(url).await {
                Ok(text) => text,
                Err(e) => {
                    log::warn!("skipping {url}: {e}");
                    continue;
                }
            };

            let tally = append_source(&mut rules, &text);
            if verbose {
                println!("  {url} - {} lines, {} rules", tally.lines, tally.rules);
            }
        }

        let path = output::artifact_path(output, category);
        output::write_rules(&path, &rules)?;
        println!("Saved {} rules to '{}'", rules.len(), path.display());
    }

    Ok(())
}

fn cmd_compile(inputs: &[String], output: &Path, verbose: bool) -> Result<(), String> {
    if inputs.is_empty() {
        return Err("No input files specified".to_string());
    }

    let mut texts = Vec::new();
    for path in inputs {
        let content =
            fs::read_to_string(path).map_err(|e| format!("Failed to read '{}': {}", path, e))?;
        texts.push(content);
    }

    let aggregation = aggregate(&texts);

    if verbose {
        for (path, tally) in inputs.iter().zip(&aggregation.per_source) {
            println!(
                "  {} - {} lines, {} rules",
                Path::new(path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy(),
                tally.lines,
                tally.rules
            );
        }
    }

    output::write_rules(output, &aggregation.rules)?;

    println!(
        "Compiled {} filter lists to '{}' ({} rules)",
        inputs.len(),
        output.display(),
        aggregation.total()
    );

    Ok(())
}

fn cmd_validate(input: &Path) -> Result<(), String> {
    let rules = output::read_rules(input)?;

    println!("Rule file '{}' is valid", input.display());
    println!("  Rules: {}", rules.len());

    Ok(())
}
