// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{FetchError, FetchResult};

/// Manifest layout version this crate reads.
pub const MANIFEST_VERSION: u32 = 1;

/// `manifest.json` at the root of a document directory.
///
/// Lists the document files to load, relative to the directory, in the order
/// results should come back.
#[derive(Deserialize, Clone, Debug)]
pub struct InputManifest {
    pub version: u32,
    pub documents: Vec<String>,
}

impl InputManifest {
    /// Read and validate `dir/manifest.json`.
    pub fn read(dir: &Path) -> FetchResult<Self> {
        let path = dir.join("manifest.json");
        let raw = fs::read_to_string(&path).map_err(|e| FetchError::io(&path, e))?;
        let manifest: InputManifest =
            serde_json::from_str(&raw).map_err(|e| FetchError::json(&path, e))?;
        if manifest.version != MANIFEST_VERSION {
            return Err(FetchError::UnsupportedManifest {
                path,
                version: manifest.version,
            });
        }
        Ok(manifest)
    }
}
