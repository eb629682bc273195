// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Proximity snippet search over in-memory documents.
//!
//! Give it documents and a query; get back, for each document that matches,
//! highlighted excerpts in which every query term appears close together,
//! each labeled with the nearest preceding page and section line.
//!
//! There is no index. Every search scans every document, which is the right
//! trade for a few hundred extracted PDFs and the wrong one for a web crawl.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐   ┌────────────┐   ┌─────────────────────────────────────┐
//! │ source/    │──▶│ search/    │──▶│ SearchResult { document, previews } │
//! │ (fetch_all)│   │            │   └─────────────────────────────────────┘
//! └────────────┘   │ scan       │  occurrences of each term
//!                  │ window     │  ±proximity chars, all terms present?
//!   query.rs ─────▶│ anchor     │  nearest "Page" / "Section" line
//!   (tokenize)     │ highlight  │  <mark>…</mark>
//!                  │ dedup      │  stable, structural
//!                  └────────────┘
//! ```
//!
//! | Module      | Responsibility                                  |
//! |-------------|-------------------------------------------------|
//! | `query`     | Tokenize the query, compile term matchers       |
//! | `search`    | Scan, window, anchor, highlight, dedup          |
//! | `source`    | Document collections (memory, JSON, directory)  |
//! | `config`    | `SearchOptions` and defaults                    |
//! | `contracts` | Debug-mode invariant checks                     |
//!
//! # Usage
//!
//! ```
//! use locus::{search, Document, SearchOptions};
//!
//! let docs = vec![Document::new(
//!     1u64,
//!     "manual.pdf",
//!     "Page 4\nSection 2 Setup\nInstall the widget before wiring the panel.",
//! )];
//!
//! let results = search(&docs, "widget panel", &SearchOptions::default());
//! assert_eq!(results.len(), 1);
//!
//! let preview = &results[0].previews[0];
//! assert_eq!(preview.page_line, "Page 4");
//! assert_eq!(preview.section_line, "Section 2 Setup");
//! assert!(preview.snippet.contains("<mark>widget</mark>"));
//! ```

pub mod config;
pub mod contracts;
pub mod error;
pub mod query;
pub mod search;
pub mod source;
pub mod testing;
mod types;

pub use config::{HighlightMode, Marker, SearchOptions, DEFAULT_PROXIMITY};
pub use error::{FetchError, FetchResult};
pub use query::{tokenize, Query, Term};
pub use search::dedup::{dedup_previews, PreviewSet};
pub use search::highlight::{highlight, highlight_spans};
pub use search::{search, search_document, search_query, Searcher};
pub use source::{
    open_source, DirectorySource, DocumentSource, InMemorySource, InputManifest, JsonFileSource,
};
pub use types::{Document, DocumentId, Occurrence, Preview, SearchResult, Window};
