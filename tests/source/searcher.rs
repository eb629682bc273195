//! `Searcher` over real and failing sources.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::common::{make_doc, make_paged_doc, write_collection};
use locus::{
    DirectorySource, Document, DocumentSource, FetchError, FetchResult, HighlightMode,
    InMemorySource, JsonFileSource, SearchOptions, Searcher,
};

/// Counts fetches so tests can see nothing is cached.
struct CountingSource {
    docs: Vec<Document>,
    fetches: AtomicUsize,
}

impl DocumentSource for CountingSource {
    fn fetch_all(&self) -> FetchResult<Vec<Document>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.docs.clone())
    }
}

struct DownSource;

impl DocumentSource for DownSource {
    fn fetch_all(&self) -> FetchResult<Vec<Document>> {
        Err(FetchError::Unavailable("503 from document store".to_string()))
    }
}

#[test]
fn test_search_directory_end_to_end() {
    let docs = vec![
        make_paged_doc(1, &[("1", "Intro", "nothing here"), ("2", "Setup", "install the widget")]),
        make_doc(2, "no widgets? a widget!"),
        make_doc(3, "unrelated"),
    ];
    let dir = write_collection(&docs);

    let searcher = Searcher::new(DirectorySource::new(dir.path()));
    let results = searcher.search("WIDGET").unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].document.id, docs[0].id);
    assert_eq!(results[0].previews[0].page_line, "Page 2");
    assert_eq!(results[0].previews[0].section_line, "Section Setup");
    assert_eq!(results[1].document.id, docs[1].id);
}

#[test]
fn test_every_search_fetches_again() {
    let source = CountingSource {
        docs: vec![make_doc(1, "needle")],
        fetches: AtomicUsize::new(0),
    };
    let searcher = Searcher::new(&source);
    searcher.search("needle").unwrap();
    searcher.search("needle").unwrap();
    assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
}

#[test]
fn test_fetch_failure_surfaces() {
    let err = Searcher::new(DownSource).search("anything").unwrap_err();
    assert!(err.to_string().contains("503"), "message: {}", err);
}

#[test]
fn test_options_flow_through() {
    let source = InMemorySource::new(vec![make_doc(1, "abcd")]);
    let options = SearchOptions::default()
        .with_highlight(HighlightMode::Merged)
        .with_marker("**", "**");
    let searcher = Searcher::new(source).with_options(options);

    let results = searcher.search("abc bcd").unwrap();
    assert_eq!(results[0].previews[0].snippet, "**abcd**");
    assert_eq!(searcher.options().highlight, HighlightMode::Merged);
}

#[test]
fn test_results_serialize_with_flattened_document() {
    let source = InMemorySource::new(vec![make_doc(7, "Page 2\nthe needle")]);
    let results = Searcher::new(source).search("needle").unwrap();

    let json = serde_json::to_value(&results).unwrap();
    assert_eq!(json[0]["id"], 7);
    assert_eq!(json[0]["name"], "doc-7");
    assert_eq!(json[0]["previews"][0]["pageLine"], "Page 2");
    assert_eq!(json[0]["previews"][0]["sectionLine"], "");
}

#[test]
fn test_store_columns_survive_into_results() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rows.json");
    let rows = serde_json::json!([
        { "id": 1, "name": "a", "content": "the needle", "author": "ops", "tags": ["x"] },
        { "id": 2, "name": "b", "content": "nothing here" }
    ]);
    std::fs::write(&path, rows.to_string()).unwrap();

    let results = Searcher::new(JsonFileSource::new(&path)).search("needle").unwrap();
    let json = serde_json::to_value(&results).unwrap();

    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["author"], "ops");
    assert_eq!(json[0]["tags"][0], "x");
    assert_eq!(json[0]["previews"][0]["snippet"], "the <mark>needle</mark>");
}
