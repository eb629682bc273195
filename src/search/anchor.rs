// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Anchor resolution: which page and section is this match on?
//!
//! Text extracted from paginated sources (PDFs mostly) tends to carry plain
//! labels like `Page 12` and `Section 4.2 Results` inline. We don't parse any
//! structure; we just look backwards from the match for the nearest marker and
//! take the rest of its line.
//!
//! # Boundary behavior
//!
//! - A marker that *starts* exactly at the match position counts as preceding it.
//! - The line runs from the marker to the next `\n`, or to the end of content.
//! - No marker before the match gives an empty line. So does an empty marker.
//! - Markers are matched case-sensitively: `page` in running text is not a label.

use crate::config::SearchOptions;

/// The page and section lines for one match position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchors<'a> {
    pub page: &'a str,
    pub section: &'a str,
}

/// Largest char boundary `<= index`.
fn floor_boundary(content: &str, index: usize) -> usize {
    let mut index = index.min(content.len());
    while !content.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Start of the rightmost `marker` beginning at or before `at`.
pub fn marker_before(content: &str, marker: &str, at: usize) -> Option<usize> {
    if marker.is_empty() {
        return None;
    }
    let limit = floor_boundary(content, at.saturating_add(marker.len()));
    content[..limit].rfind(marker)
}

/// The trimmed line starting at `pos`.
fn line_from(content: &str, pos: usize) -> &str {
    let rest = &content[pos..];
    let line = match rest.find('\n') {
        Some(newline) => &rest[..newline],
        None => rest,
    };
    line.trim()
}

/// The trimmed line of the nearest `marker` at or before `at`, or `""`.
pub fn anchor_line<'a>(content: &'a str, marker: &str, at: usize) -> &'a str {
    marker_before(content, marker, at).map_or("", |pos| line_from(content, pos))
}

/// Resolve both anchors for a match starting at byte `at`.
pub fn resolve<'a>(content: &'a str, at: usize, options: &SearchOptions) -> Anchors<'a> {
    Anchors {
        page: anchor_line(content, &options.page_marker, at),
        section: anchor_line(content, &options.section_marker, at),
    }
}
