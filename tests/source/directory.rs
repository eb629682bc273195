//! Tests for manifest directories.

use std::fs;

use crate::common::{make_doc, write_collection, write_manifest};
use locus::{
    open_source, DirectorySource, DocumentId, DocumentSource, FetchError, InputManifest,
};
use tempfile::TempDir;

#[test]
fn test_load_collection_in_manifest_order() {
    let docs = vec![make_doc(30, "third"), make_doc(10, "first"), make_doc(20, "second")];
    let dir = write_collection(&docs);

    let loaded = DirectorySource::new(dir.path()).fetch_all().unwrap();
    assert_eq!(loaded, docs);
}

#[test]
fn test_progress_does_not_change_result() {
    let docs: Vec<_> = (0..25).map(|i| make_doc(i, &format!("doc {}", i))).collect();
    let dir = write_collection(&docs);

    let quiet = DirectorySource::new(dir.path()).fetch_all().unwrap();
    let noisy = DirectorySource::new(dir.path())
        .with_progress(true)
        .fetch_all()
        .unwrap();
    assert_eq!(quiet, noisy);
}

#[test]
fn test_empty_collection() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), 1, &[]);
    assert!(DirectorySource::new(dir.path()).fetch_all().unwrap().is_empty());
}

#[test]
fn test_missing_manifest_is_io_error() {
    let dir = TempDir::new().unwrap();
    match DirectorySource::new(dir.path()).fetch_all() {
        Err(FetchError::Io { path, .. }) => assert!(path.ends_with("manifest.json")),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_missing_document_file_fails_whole_fetch() {
    let dir = write_collection(&[make_doc(1, "present")]);
    write_manifest(dir.path(), 1, &["0.json", "missing.json"]);

    match DirectorySource::new(dir.path()).fetch_all() {
        Err(FetchError::Io { path, .. }) => assert!(path.ends_with("missing.json")),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_invalid_document_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("bad.json"), "{ not json").unwrap();
    write_manifest(dir.path(), 1, &["bad.json"]);

    let err = DirectorySource::new(dir.path()).fetch_all().unwrap_err();
    assert!(matches!(err, FetchError::Json { .. }), "got {:?}", err);
    assert!(err.to_string().contains("bad.json"), "message: {}", err);
}

#[test]
fn test_unsupported_manifest_version() {
    let dir = TempDir::new().unwrap();
    write_manifest(dir.path(), 2, &[]);

    match InputManifest::read(dir.path()) {
        Err(FetchError::UnsupportedManifest { version, .. }) => assert_eq!(version, 2),
        other => panic!("expected UnsupportedManifest, got {:?}", other),
    }
}

#[test]
fn test_document_fields_default_when_absent() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), r#"{"id": "abc"}"#).unwrap();
    write_manifest(dir.path(), 1, &["a.json"]);

    let docs = DirectorySource::new(dir.path()).fetch_all().unwrap();
    assert_eq!(docs[0].id, DocumentId::Text("abc".to_string()));
    assert_eq!(docs[0].name, "");
    assert_eq!(docs[0].content, "");
}

#[test]
fn test_open_source_picks_directory() {
    let docs = vec![make_doc(1, "hello")];
    let dir = write_collection(&docs);
    assert_eq!(open_source(dir.path(), false).fetch_all().unwrap(), docs);
}

#[test]
fn test_open_source_with_progress_loads_the_same_documents() {
    let docs: Vec<_> = (0..5).map(|i| make_doc(i, &format!("doc {}", i))).collect();
    let dir = write_collection(&docs);
    assert_eq!(open_source(dir.path(), true).fetch_all().unwrap(), docs);
}
