// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the locus command-line interface.
//!
//! Two subcommands: `search` to run a query against a document collection, and
//! `inspect` to see what the collection looks like (sizes, how many page and
//! section labels each document carries). The input is either a directory with
//! a `manifest.json` or a single JSON array of documents (`-` for stdin).

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use locus::{HighlightMode, SearchOptions, DEFAULT_PROXIMITY};

#[derive(Parser)]
#[command(
    name = "locus",
    about = "Proximity snippet search with page and section anchors",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every command that resolves anchors.
#[derive(clap::Args, Clone)]
pub struct MarkerArgs {
    /// Literal label that starts a page line
    #[arg(long, default_value = "Page")]
    pub page_marker: String,

    /// Literal label that starts a section line
    #[arg(long, default_value = "Section")]
    pub section_marker: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search documents and print highlighted previews
    Search {
        /// Search query (whitespace-separated terms, all must appear together)
        query: String,

        /// Directory with manifest.json, or a JSON file of documents ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Characters of context on each side of a match
        #[arg(short, long, default_value_t = DEFAULT_PROXIMITY)]
        proximity: usize,

        #[command(flatten)]
        markers: MarkerArgs,

        /// How terms are wrapped in markup
        ///
        /// `sequential` rewrites the snippet once per term (later terms can match
        /// inside earlier markup). `merged` collects all spans first and renders
        /// once.
        #[arg(long, value_enum, default_value_t = HighlightMode::Sequential)]
        highlight: HighlightMode,

        /// Print results as JSON instead of formatted text
        #[arg(long)]
        json: bool,

        /// Search documents one at a time instead of in parallel
        #[arg(long)]
        no_parallel: bool,

        /// Show a progress bar while loading a document directory
        #[arg(long)]
        progress: bool,
    },

    /// List the documents in a collection
    Inspect {
        /// Directory with manifest.json, or a JSON file of documents ("-" for stdin)
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        markers: MarkerArgs,
    },
}

impl MarkerArgs {
    /// Apply the marker flags on top of `options`.
    pub fn apply(&self, options: SearchOptions) -> SearchOptions {
        options.with_markers(self.page_marker.clone(), self.section_marker.clone())
    }
}
