// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search over arbitrary documents and queries.
//!
//! Throws arbitrary content, queries and proximities at `search_document` to
//! verify it never panics and every preview it returns is well formed.
//! If the snippet slicer falls over on a combining mark halfway through a
//! window, this is where we find out.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use locus::testing::strip_markup;
use locus::{search_document, Document, HighlightMode, Query, SearchOptions};

#[derive(Arbitrary, Debug)]
struct Input {
    content: String,
    query: String,
    proximity: u8,
    merged: bool,
}

fuzz_target!(|input: Input| {
    // Cap sizes to avoid timeouts on quadratic-ish inputs
    let content: String = input.content.chars().take(2_000).collect();
    let raw: String = input.query.chars().take(64).collect();

    let mode = if input.merged {
        HighlightMode::Merged
    } else {
        HighlightMode::Sequential
    };
    let options = SearchOptions::default()
        .with_proximity(input.proximity as usize)
        .with_highlight(mode);

    let doc = Document::new(0u64, "fuzz", content.as_str());
    let query = Query::parse(&raw);

    // INVARIANT 1: search never panics
    let previews = search_document(&doc, &query, &options);

    // INVARIANT 2: an empty query never matches
    if query.is_empty() {
        assert!(previews.is_empty(), "empty query produced previews");
    }

    for preview in &previews {
        // INVARIANT 3: anchor lines are single trimmed lines
        assert!(!preview.page_line.contains('\n'));
        assert!(!preview.section_line.contains('\n'));
        assert_eq!(preview.page_line.trim(), preview.page_line);

        // INVARIANT 4: merged snippets are substrings of the content with
        // every term present
        if input.merged {
            let marker = &options.marker;
            let text = strip_markup(&preview.snippet, &marker.open, &marker.close);
            // Markup can only be stripped unambiguously when the content has none.
            if !content.contains('<') {
                assert!(content.contains(&text), "snippet not in content");
                assert!(query.all_present(&text), "window lost a term");
            }
        }
    }

    // INVARIANT 5: no duplicate previews
    for (i, a) in previews.iter().enumerate() {
        assert!(!previews[i + 1..].contains(a), "duplicate preview");
    }
});
