// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Searching itself cannot fail: empty queries, missing markers and empty
//! documents all have well-defined empty results. The only failure is not
//! getting the documents in the first place.

use std::path::PathBuf;
use thiserror::Error;

/// A document source could not produce its collection.
///
/// Fetches are all-or-nothing: when this is returned, no documents were
/// searched and no partial results exist.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A file or directory could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was read but is not the expected JSON shape.
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The manifest declares a layout this version does not understand.
    #[error("unsupported manifest version {version} in {}", path.display())]
    UnsupportedManifest { path: PathBuf, version: u32 },

    /// A custom source failed for its own reasons (network, auth, ...).
    #[error("document source unavailable: {0}")]
    Unavailable(String),
}

impl FetchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FetchError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        FetchError::Json {
            path: path.into(),
            source,
        }
    }
}

/// Result alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
