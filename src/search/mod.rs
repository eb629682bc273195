// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-document proximity search.
//!
//! ```text
//!  raw query ──▶ Query ──┐
//!                        ▼
//!  document ──▶ scan ──▶ window ──▶ anchor + highlight ──▶ dedup ──▶ previews
//! ```
//!
//! Everything is recomputed from scratch on each call. Documents never see
//! each other, so with the `parallel` feature [`search_query`] fans out across
//! them with rayon; the ordered collect keeps results in input order either way.

pub mod anchor;
pub mod dedup;
pub mod highlight;
pub mod scan;
pub mod window;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::SearchOptions;
use crate::contracts::{
    check_all_terms_present, check_occurrence_valid, check_previews_unique, check_window_covers,
    check_window_valid,
};
use crate::error::FetchResult;
use crate::query::Query;
use crate::source::DocumentSource;
use crate::types::{Document, Preview, SearchResult, Window};

use self::dedup::PreviewSet;
use self::window::candidates;

/// All deduplicated previews for one document, in scan order.
///
/// Empty when the query has no terms, the document has no content, or no
/// window contains every term.
pub fn search_document(document: &Document, query: &Query, options: &SearchOptions) -> Vec<Preview> {
    let content = document.content.as_str();
    if query.is_empty() || content.is_empty() {
        return Vec::new();
    }

    let mut previews = PreviewSet::new();
    // Consecutive occurrences often land on the same window under the same
    // anchors; identical inputs render identical previews, so skip the work.
    let mut last: Option<(Window, &str, &str)> = None;

    for candidate in candidates(content, query, options.proximity) {
        check_occurrence_valid(content, &candidate.occurrence);
        check_window_valid(content, &candidate.window);
        check_window_covers(&candidate.window, &candidate.occurrence);
        check_all_terms_present(query, candidate.text);

        let anchors = anchor::resolve(content, candidate.occurrence.start, options);
        let key = (candidate.window, anchors.page, anchors.section);
        if last == Some(key) {
            continue;
        }
        last = Some(key);

        previews.insert(Preview {
            snippet: highlight::highlight(candidate.text, query, options.highlight, &options.marker),
            page_line: anchors.page.to_string(),
            section_line: anchors.section.to_string(),
        });
    }

    let previews = previews.into_vec();
    check_previews_unique(&previews);
    debug!(document = %document.id, previews = previews.len(), "document scanned");
    previews
}

fn match_document(document: &Document, query: &Query, options: &SearchOptions) -> Option<SearchResult> {
    let previews = search_document(document, query, options);
    (!previews.is_empty()).then(|| SearchResult {
        document: document.clone(),
        previews,
    })
}

/// Search `documents` for an already-parsed query.
///
/// Documents without a single preview are left out entirely.
pub fn search_query(documents: &[Document], query: &Query, options: &SearchOptions) -> Vec<SearchResult> {
    if query.is_empty() {
        return Vec::new();
    }

    #[cfg(feature = "parallel")]
    {
        if options.parallel {
            return documents
                .par_iter()
                .filter_map(|document| match_document(document, query, options))
                .collect();
        }
    }

    documents
        .iter()
        .filter_map(|document| match_document(document, query, options))
        .collect()
}

/// Search `documents` for `raw_query`.
///
/// Empty or whitespace-only queries return no results.
pub fn search(documents: &[Document], raw_query: &str, options: &SearchOptions) -> Vec<SearchResult> {
    search_query(documents, &Query::parse(raw_query), options)
}

/// A document source paired with search options.
///
/// Every call to [`Searcher::search`] fetches the full collection afresh and
/// searches it. Nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct Searcher<S> {
    source: S,
    options: SearchOptions,
}

impl<S: DocumentSource> Searcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch every document and search them.
    ///
    /// A failed fetch aborts the search with no results.
    pub fn search(&self, raw_query: &str) -> FetchResult<Vec<SearchResult>> {
        let documents = self.source.fetch_all()?;
        let query = Query::parse(raw_query);
        let results = search_query(&documents, &query, &self.options);
        info!(
            terms = query.len(),
            documents = documents.len(),
            matched = results.len(),
            "search completed"
        );
        Ok(results)
    }
}
