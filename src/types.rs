// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values that flow through a search.
//!
//! Documents come in from a [`DocumentSource`](crate::source::DocumentSource),
//! previews go out inside [`SearchResult`]s. Everything in between
//! ([`Occurrence`], [`Window`]) lives for one search call and is never stored.
//!
//! # Invariants
//!
//! - **Occurrence**: `start < end ≤ content.len()`, both on char boundaries.
//! - **Window**: `start ≤ end ≤ content.len()`, both on char boundaries.
//! - **SearchResult**: `previews` is non-empty and holds no structural duplicates.
//!
//! All offsets are byte offsets into the UTF-8 content. Proximity is measured
//! in characters, but once a window is resolved it is stored in bytes so it
//! can slice `content` directly.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

// =============================================================================
// DOCUMENTS
// =============================================================================

/// Opaque document identifier.
///
/// Stores hand out whatever they use as a primary key: auto-increment integers
/// or UUID strings. Both round-trip through JSON unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Number(u64),
    Text(String),
}

impl Default for DocumentId {
    fn default() -> Self {
        DocumentId::Number(0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentId::Number(n) => write!(f, "{}", n),
            DocumentId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for DocumentId {
    fn from(id: u64) -> Self {
        DocumentId::Number(id)
    }
}

impl From<&str> for DocumentId {
    fn from(id: &str) -> Self {
        DocumentId::Text(id.to_string())
    }
}

impl From<String> for DocumentId {
    fn from(id: String) -> Self {
        DocumentId::Text(id)
    }
}

/// A searchable document.
///
/// Read-only for the duration of a search. A document without `content` is
/// valid; it simply never matches.
///
/// Store rows often carry more columns than the search needs. Those land in
/// `extra` untouched and are written back out next to the previews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: DocumentId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<DocumentId>, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            content: content.into(),
            extra: Map::new(),
        }
    }
}

// =============================================================================
// SCAN-LOCAL VALUES
// =============================================================================

/// One place where a query term appears in a document.
///
/// `term` indexes into [`Query::terms`](crate::Query::terms). `start..end` is
/// the matched text, which may differ in byte length from the term itself when
/// case folding crosses encodings (e.g. `K` vs the Kelvin sign).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub term: usize,
    pub start: usize,
    pub end: usize,
}

/// Byte bounds of a proximity window, already clipped to the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    /// Borrow the window's text out of `content`.
    ///
    /// Returns an empty slice rather than panicking if the window does not
    /// belong to `content`.
    #[inline]
    pub fn slice<'a>(&self, content: &'a str) -> &'a str {
        content.get(self.start..self.end).unwrap_or("")
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

// =============================================================================
// RESULTS
// =============================================================================

/// A highlighted excerpt plus the nearest page and section labels before it.
///
/// Equality is structural over all three fields. Two windows that render to
/// the same text under the same anchors are the same preview, no matter which
/// occurrence produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub snippet: String,
    /// Empty when no page marker precedes the match.
    pub page_line: String,
    /// Empty when no section marker precedes the match.
    pub section_line: String,
}

/// A document that matched, with its deduplicated previews in scan order.
///
/// Serializes as the document's own fields plus a `previews` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub document: Document,
    pub previews: Vec<Preview>,
}
