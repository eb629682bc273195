// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document directories: a `manifest.json` plus one JSON file per document.
//!
//! Reading and parsing files is the only expensive part of a directory fetch,
//! and every file is independent, so with the `parallel` feature we
//! `par_iter()` over the manifest. Rayon's ordered collect keeps manifest
//! order, which is the order results come back in.
//!
//! The first unreadable or malformed file fails the whole fetch. A half-loaded
//! corpus would silently drop matches.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

use super::{DocumentSource, InputManifest};
use crate::error::{FetchError, FetchResult};
use crate::types::Document;

/// Reads a manifest directory on every fetch.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    progress: bool,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            progress: false,
        }
    }

    /// Show a progress bar on stderr while loading (needs `parallel`).
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DocumentSource for DirectorySource {
    fn fetch_all(&self) -> FetchResult<Vec<Document>> {
        let manifest = InputManifest::read(&self.root)?;

        #[cfg(feature = "parallel")]
        {
            if self.progress {
                let progress = ProgressBar::new(manifest.documents.len() as u64);
                progress.set_style(create_progress_style());
                progress.set_prefix("Loading");
                let docs = load_documents_with_progress(&self.root, &manifest, &progress);
                match &docs {
                    Ok(docs) => {
                        progress.finish_with_message(format!("loaded {} documents", docs.len()))
                    }
                    Err(_) => progress.abandon(),
                }
                return docs;
            }
        }

        load_documents(&self.root, &manifest)
    }
}

/// Create the style used for the loading progress bar.
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

fn load_one(input_dir: &Path, filename: &str) -> FetchResult<Document> {
    let path = input_dir.join(filename);
    let raw = fs::read_to_string(&path).map_err(|e| FetchError::io(&path, e))?;
    serde_json::from_str::<Document>(&raw).map_err(|e| {
        warn!(path = %path.display(), error = %e, "document file is not valid JSON");
        FetchError::json(&path, e)
    })
}

/// Load every document listed in `manifest`, in manifest order.
pub fn load_documents(input_dir: &Path, manifest: &InputManifest) -> FetchResult<Vec<Document>> {
    #[cfg(feature = "parallel")]
    let docs = manifest
        .documents
        .par_iter()
        .map(|filename| load_one(input_dir, filename))
        .collect::<FetchResult<Vec<Document>>>()?;

    #[cfg(not(feature = "parallel"))]
    let docs = manifest
        .documents
        .iter()
        .map(|filename| load_one(input_dir, filename))
        .collect::<FetchResult<Vec<Document>>>()?;

    debug!(dir = %input_dir.display(), documents = docs.len(), "loaded document directory");
    Ok(docs)
}

/// Load every document listed in `manifest`, reporting progress as files finish.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    input_dir: &Path,
    manifest: &InputManifest,
    progress: &ProgressBar,
) -> FetchResult<Vec<Document>> {
    let counter = AtomicUsize::new(0);
    let total = manifest.documents.len();

    let docs = manifest
        .documents
        .par_iter()
        .map(|filename| {
            let doc = load_one(input_dir, filename)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(doc)
        })
        .collect::<FetchResult<Vec<Document>>>()?;

    debug!(dir = %input_dir.display(), documents = docs.len(), "loaded document directory");
    Ok(docs)
}
