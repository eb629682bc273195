// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Proximity windows.
//!
//! Every occurrence anchors a window reaching `proximity` characters to either
//! side of the matched text. The window counts as a match only if every query
//! term appears inside it, not just the term that anchored it. Anchoring on one
//! term while demanding all of them keeps the scan linear in occurrences and
//! still enforces proximity for multi-word queries.
//!
//! Windows are produced lazily: scan, build, validate, and only then does the
//! caller materialize anything. A document with ten thousand hits for a common
//! word never holds ten thousand snippets at once.

use crate::query::Query;
use crate::search::scan::scan_query;
use crate::types::{Occurrence, Window};

/// A validated window, borrowed from the document content.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub occurrence: Occurrence,
    pub window: Window,
    pub text: &'a str,
}

/// Byte offset `count` characters before `from`, clipped at 0.
fn chars_back(content: &str, from: usize, count: usize) -> usize {
    if count == 0 {
        return from;
    }
    content[..from]
        .char_indices()
        .rev()
        .nth(count - 1)
        .map_or(0, |(idx, _)| idx)
}

/// Byte offset `count` characters after `from`, clipped at `content.len()`.
fn chars_forward(content: &str, from: usize, count: usize) -> usize {
    content[from..]
        .char_indices()
        .nth(count)
        .map_or(content.len(), |(idx, _)| from + idx)
}

/// The window around an occurrence, clipped to `[0, content.len()]`.
pub fn window_around(content: &str, occurrence: &Occurrence, proximity: usize) -> Window {
    Window {
        start: chars_back(content, occurrence.start, proximity),
        end: chars_forward(content, occurrence.end, proximity),
    }
}

/// All windows in `content` that contain every query term.
///
/// Yields candidates in scan order: all windows for the first term, then the
/// second, and so on.
pub fn candidates<'a>(
    content: &'a str,
    query: &'a Query,
    proximity: usize,
) -> impl Iterator<Item = Candidate<'a>> + 'a {
    scan_query(content, query).filter_map(move |occurrence| {
        let window = window_around(content, &occurrence, proximity);
        let text = window.slice(content);
        query.all_present(text).then_some(Candidate {
            occurrence,
            window,
            text,
        })
    })
}
