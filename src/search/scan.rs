// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Occurrence scanning.
//!
//! Finds every case-insensitive occurrence of a term by repeated search, each
//! attempt starting one character past the previous match's start. That means
//! overlapping occurrences at different positions are all reported ("aa" occurs
//! twice in "aaa"), but no position is reported twice.
//!
//! The scan is lazy and holds no state beyond its cursor, so it can be
//! restarted at any time by building a new iterator.

use regex::Regex;
use std::iter::FusedIterator;

use crate::query::Query;
use crate::types::Occurrence;

/// Lazy iterator over `(start, end)` byte ranges of one term in one text.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    content: &'a str,
    matcher: &'a Regex,
    cursor: usize,
}

impl<'a> Iterator for Occurrences<'a> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor > self.content.len() {
            return None;
        }

        let Some(found) = self.matcher.find_at(self.content, self.cursor) else {
            // Park past the end so a finished scan stays finished.
            self.cursor = self.content.len() + 1;
            return None;
        };

        // Step one character, not one byte, so the cursor stays on a boundary.
        let step = self.content[found.start()..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.cursor = found.start() + step;

        Some((found.start(), found.end()))
    }
}

impl FusedIterator for Occurrences<'_> {}

/// Scan `content` for every occurrence of `matcher`.
pub fn find_occurrences<'a>(content: &'a str, matcher: &'a Regex) -> Occurrences<'a> {
    Occurrences {
        content,
        matcher,
        cursor: 0,
    }
}

/// Every occurrence of every query term, term by term in query order.
///
/// Duplicate terms are scanned once per appearance, the same way they were
/// typed.
pub fn scan_query<'a>(content: &'a str, query: &'a Query) -> impl Iterator<Item = Occurrence> + 'a {
    query
        .matchers()
        .iter()
        .enumerate()
        .flat_map(move |(term, matcher)| {
            find_occurrences(content, matcher).map(move |(start, end)| Occurrence { term, start, end })
        })
}
