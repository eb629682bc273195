//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use locus::{search_document, Document, Marker, Preview, Query, SearchOptions};
use tempfile::TempDir;

// Re-export canonical test utilities from locus::testing
pub use locus::testing::{filler, make_doc, make_paged_doc, strip_markup};

// ============================================================================
// SEARCH HELPERS
// ============================================================================

/// Previews for one document under default options.
pub fn previews_for(doc: &Document, query: &str) -> Vec<Preview> {
    search_document(doc, &Query::parse(query), &SearchOptions::default())
}

/// Previews for one document under the given options.
pub fn previews_with(doc: &Document, query: &str, options: &SearchOptions) -> Vec<Preview> {
    search_document(doc, &Query::parse(query), options)
}

/// A snippet with the default `<mark>` tags removed.
pub fn plain(snippet: &str) -> String {
    let marker = Marker::default();
    strip_markup(snippet, &marker.open, &marker.close)
}

// ============================================================================
// DOCUMENT DIRECTORIES
// ============================================================================

/// Write a manifest with the given version and file list.
pub fn write_manifest(dir: &Path, version: u32, files: &[&str]) {
    let manifest = serde_json::json!({
        "version": version,
        "documents": files,
    });
    fs::write(dir.join("manifest.json"), manifest.to_string()).expect("write manifest");
}

/// Write `docs` as `0.json`, `1.json`, ... plus a v1 manifest listing them in order.
pub fn write_collection(docs: &[Document]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    let files: Vec<String> = (0..docs.len()).map(|i| format!("{}.json", i)).collect();
    for (doc, file) in docs.iter().zip(&files) {
        let raw = serde_json::to_string(doc).expect("serialize document");
        fs::write(dir.path().join(file), raw).expect("write document");
    }
    let names: Vec<&str> = files.iter().map(String::as_str).collect();
    write_manifest(dir.path(), 1, &names);
    dir
}
