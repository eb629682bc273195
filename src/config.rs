// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Defaults: a 100-character proximity, `"Page"` and `"Section"` anchors,
//! `<mark>` markup, sequential highlighting. The CLI maps its flags straight
//! onto these fields, and the struct deserializes from camelCase JSON for
//! callers that keep settings next to their documents.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default proximity, in characters on each side of an occurrence.
pub const DEFAULT_PROXIMITY: usize = 100;

pub const DEFAULT_PAGE_MARKER: &str = "Page";
pub const DEFAULT_SECTION_MARKER: &str = "Section";

/// How query terms are wrapped in markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HighlightMode {
    /// Rewrite the snippet once per term, in query order. Later terms see the
    /// markup inserted by earlier ones.
    #[default]
    Sequential,
    /// Collect every term's spans over the raw snippet, merge overlaps, and
    /// render once. Markup is never matched.
    Merged,
}

/// The opening and closing tokens wrapped around each highlighted span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub open: String,
    pub close: String,
}

impl Default for Marker {
    fn default() -> Self {
        Self {
            open: "<mark>".to_string(),
            close: "</mark>".to_string(),
        }
    }
}

/// Tunables for one search call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// Characters of context on each side of an occurrence. All terms must
    /// fall inside this window for it to count.
    pub proximity: usize,
    /// Literal (case-sensitive) label that starts a page line.
    pub page_marker: String,
    /// Literal (case-sensitive) label that starts a section line.
    pub section_marker: String,
    pub highlight: HighlightMode,
    pub marker: Marker,
    /// Fan out across documents. Ignored without the `parallel` feature.
    pub parallel: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            proximity: DEFAULT_PROXIMITY,
            page_marker: DEFAULT_PAGE_MARKER.to_string(),
            section_marker: DEFAULT_SECTION_MARKER.to_string(),
            highlight: HighlightMode::default(),
            marker: Marker::default(),
            parallel: true,
        }
    }
}

impl SearchOptions {
    pub fn with_proximity(mut self, proximity: usize) -> Self {
        self.proximity = proximity;
        self
    }

    pub fn with_highlight(mut self, mode: HighlightMode) -> Self {
        self.highlight = mode;
        self
    }

    pub fn with_markers(mut self, page: impl Into<String>, section: impl Into<String>) -> Self {
        self.page_marker = page.into();
        self.section_marker = section.into();
        self
    }

    pub fn with_marker(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.marker = Marker {
            open: open.into(),
            close: close.into(),
        };
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
