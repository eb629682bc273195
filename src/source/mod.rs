// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where documents come from.
//!
//! The engine never owns documents; it asks a [`DocumentSource`] for the whole
//! collection once per search and treats the result as read-only input. A
//! source either hands back every document or fails with a [`FetchError`],
//! never a partial list.
//!
//! Three sources ship with the crate:
//!
//! | Source            | Input                                              |
//! |-------------------|----------------------------------------------------|
//! | `InMemorySource`  | A `Vec<Document>` you already have                 |
//! | `JsonFileSource`  | One JSON array of documents (or `-` for stdin)     |
//! | `DirectorySource` | `manifest.json` plus one JSON file per document    |
//!
//! Remote stores plug in by implementing the trait; retries and auth belong
//! in that implementation, not in the engine.

pub mod directory;
pub mod manifest;

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{FetchError, FetchResult};
use crate::types::Document;

pub use directory::{load_documents, DirectorySource};
#[cfg(feature = "parallel")]
pub use directory::load_documents_with_progress;
pub use manifest::{InputManifest, MANIFEST_VERSION};

/// A provider of the full document collection.
pub trait DocumentSource {
    /// Fetch every document. Called once per search.
    fn fetch_all(&self) -> FetchResult<Vec<Document>>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for &S {
    fn fetch_all(&self) -> FetchResult<Vec<Document>> {
        (**self).fetch_all()
    }
}

impl<S: DocumentSource + ?Sized> DocumentSource for Box<S> {
    fn fetch_all(&self) -> FetchResult<Vec<Document>> {
        (**self).fetch_all()
    }
}

/// Documents already in memory. Fetching clones them.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    documents: Vec<Document>,
}

impl InMemorySource {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }
}

impl From<Vec<Document>> for InMemorySource {
    fn from(documents: Vec<Document>) -> Self {
        Self::new(documents)
    }
}

impl DocumentSource for InMemorySource {
    fn fetch_all(&self) -> FetchResult<Vec<Document>> {
        Ok(self.documents.clone())
    }
}

/// A single JSON file holding an array of documents.
///
/// This is the shape a `select *` against a documents table returns, so a
/// dump of the remote store can be searched offline. The path `-` reads stdin.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_raw(&self) -> FetchResult<String> {
        if self.path.as_os_str() == "-" {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(|e| FetchError::io(&self.path, e))?;
            return Ok(raw);
        }
        fs::read_to_string(&self.path).map_err(|e| FetchError::io(&self.path, e))
    }
}

impl DocumentSource for JsonFileSource {
    fn fetch_all(&self) -> FetchResult<Vec<Document>> {
        let raw = self.read_raw()?;
        serde_json::from_str(&raw).map_err(|e| FetchError::json(&self.path, e))
    }
}

/// Pick a source for `path`: a directory source for directories, a JSON file
/// source for anything else. `progress` only affects directory loads.
pub fn open_source(path: &Path, progress: bool) -> Box<dyn DocumentSource + Send + Sync> {
    if path.is_dir() {
        Box::new(DirectorySource::new(path).with_progress(progress))
    } else {
        Box::new(JsonFileSource::new(path))
    }
}
