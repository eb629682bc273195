// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use locus::{open_source, DocumentSource, HighlightMode, SearchOptions, Searcher};

mod cli;
use cli::{display, Cli, Commands, MarkerArgs};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            query,
            input,
            proximity,
            markers,
            highlight,
            json,
            no_parallel,
            progress,
        } => run_search(
            &query,
            &input,
            SearchArgs {
                proximity,
                markers,
                highlight,
                json,
                parallel: !no_parallel,
                progress,
            },
        ),
        Commands::Inspect { input, markers } => run_inspect(&input, &markers),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so `--json` output on stdout stays clean.
/// `RUST_LOG=locus=debug` shows per-document scan counts.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

struct SearchArgs {
    proximity: usize,
    markers: MarkerArgs,
    highlight: HighlightMode,
    json: bool,
    parallel: bool,
    progress: bool,
}

fn run_search(query: &str, input: &Path, args: SearchArgs) -> Result<()> {
    let mut options = args.markers.apply(
        SearchOptions::default()
            .with_proximity(args.proximity)
            .with_highlight(args.highlight),
    );
    options.parallel = args.parallel;

    let searcher = Searcher::new(open_source(input, args.progress)).with_options(options);
    let results = searcher
        .search(query)
        .with_context(|| format!("failed to load documents from {}", input.display()))?;

    if args.json {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &results).context("failed to write results")?;
        writeln!(out).context("failed to write results")?;
    } else {
        display::print_results(query, &results, &searcher.options().marker);
    }
    Ok(())
}

fn run_inspect(input: &Path, markers: &MarkerArgs) -> Result<()> {
    let documents = open_source(input, false)
        .fetch_all()
        .with_context(|| format!("failed to load documents from {}", input.display()))?;

    display::print_inventory(&documents, &markers.page_marker, &markers.section_marker);
    Ok(())
}
