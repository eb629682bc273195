// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wrapping query terms in highlight markup.
//!
//! Two renderers, picked by [`HighlightMode`]:
//!
//! - **Sequential** rewrites the snippet once per term, in query order, each
//!   pass matching over the output of the previous one. Markup inserted by an
//!   earlier term is ordinary text to a later term: with the default marker the
//!   query `x mark` wraps `x` first and then also wraps the `mark` inside
//!   `<mark>`. That is the historical output and is kept bit-for-bit.
//!
//! - **Merged** finds every term's spans in the raw snippet, merges overlapping
//!   and touching spans, and renders once. Markup can't be matched and spans
//!   never nest.
//!
//! Neither renderer escapes anything. The snippet is raw document text with
//! markup spliced in; whoever renders it as HTML owns sanitization.

use regex::Captures;
use std::ops::Range;

use crate::config::{HighlightMode, Marker};
use crate::query::Query;

/// Highlight `raw` for `query` with the given mode and marker.
pub fn highlight(raw: &str, query: &Query, mode: HighlightMode, marker: &Marker) -> String {
    match mode {
        HighlightMode::Sequential => highlight_sequential(raw, query, marker),
        HighlightMode::Merged => render_spans(raw, &highlight_spans(raw, query), marker),
    }
}

/// One global, case-insensitive rewrite per term, in query order.
pub fn highlight_sequential(raw: &str, query: &Query, marker: &Marker) -> String {
    let mut text = raw.to_string();
    for matcher in query.matchers() {
        text = matcher
            .replace_all(&text, |caps: &Captures<'_>| {
                format!("{}{}{}", marker.open, &caps[0], marker.close)
            })
            .into_owned();
    }
    text
}

/// Sorted, non-overlapping byte ranges of every term match in `raw`.
///
/// Overlapping or touching matches from different terms merge into one range.
pub fn highlight_spans(raw: &str, query: &Query) -> Vec<Range<usize>> {
    let mut spans: Vec<Range<usize>> = query
        .matchers()
        .iter()
        .flat_map(|matcher| matcher.find_iter(raw).map(|m| m.range()))
        .collect();
    spans.sort_unstable_by_key(|span| (span.start, span.end));

    let mut merged: Vec<Range<usize>> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => last.end = last.end.max(span.end),
            _ => merged.push(span),
        }
    }
    merged
}

/// Render `raw` with each span wrapped in the marker.
///
/// `spans` must be sorted, non-overlapping, and on char boundaries, as
/// returned by [`highlight_spans`].
pub fn render_spans(raw: &str, spans: &[Range<usize>], marker: &Marker) -> String {
    let extra = spans.len() * (marker.open.len() + marker.close.len());
    let mut out = String::with_capacity(raw.len() + extra);
    let mut cursor = 0;
    for span in spans {
        out.push_str(&raw[cursor..span.start]);
        out.push_str(&marker.open);
        out.push_str(&raw[span.start..span.end]);
        out.push_str(&marker.close);
        cursor = span.end;
    }
    out.push_str(&raw[cursor..]);
    out
}
