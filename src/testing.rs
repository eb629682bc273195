// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::Document;

/// Create a document named `doc-{id}` with the given content.
///
/// This is the canonical implementation used across all tests.
pub fn make_doc(id: u64, content: &str) -> Document {
    Document::new(id, format!("doc-{}", id), content)
}

/// Create a document laid out as labeled pages and sections.
///
/// Each `(page, section, body)` triple renders as:
///
/// ```text
/// Page {page}
/// Section {section}
/// {body}
/// ```
pub fn make_paged_doc(id: u64, pages: &[(&str, &str, &str)]) -> Document {
    let content = pages
        .iter()
        .map(|(page, section, body)| format!("Page {}\nSection {}\n{}\n", page, section, body))
        .collect::<String>();
    make_doc(id, &content)
}

/// `filler` repeated `count` times.
pub fn filler(ch: char, count: usize) -> String {
    std::iter::repeat(ch).take(count).collect()
}

/// Remove every occurrence of the marker tokens from a snippet.
pub fn strip_markup(snippet: &str, open: &str, close: &str) -> String {
    snippet.replace(open, "").replace(close, "")
}
