// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query tokenization and term matchers.
//!
//! A raw query becomes an ordered list of [`Term`]s: lowercased,
//! whitespace-delimited, empty tokens dropped. Order and duplicates survive
//! tokenization untouched; "rust rust" is two terms. The conjunctive window
//! test doesn't care (it is order-independent and duplicate-tolerant), but the
//! sequential highlighter does, so we keep exactly what the user typed.
//!
//! Each term gets one case-insensitive literal matcher, compiled once per
//! query and shared by every document. Terms are regex-escaped first, so
//! `c++` or `a.b` match literally and a term can never change pattern
//! semantics.
//!
//! Full lowercasing and the regex crate's simple case folding disagree on a
//! handful of characters: `İ` lowercases to `i` + U+0307, which no longer
//! folds back to `İ`. A matcher therefore accepts the token as typed as well
//! as its lowercase form, so text copied verbatim from a document always
//! finds that document.

use regex::{Regex, RegexBuilder};
use std::fmt;
use std::ops::Deref;
use tracing::warn;

/// Compiled-size ceiling for a single term matcher.
///
/// Case-insensitive Unicode literals expand into character classes, so very
/// long terms can outgrow the regex crate's 10 MB default.
const MATCHER_SIZE_LIMIT: usize = 64 * 1024 * 1024;

/// A normalized unit of the search query. Never empty, always lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Term(String);

impl Term {
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for Term {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Split a raw query into terms.
///
/// Lowercases, splits on runs of whitespace, discards empty tokens. Empty or
/// whitespace-only input yields no terms.
pub fn tokenize(query: &str) -> Vec<Term> {
    query.split_whitespace().map(Term::from_token).collect()
}

impl Term {
    fn from_token(token: &str) -> Self {
        Term(token.to_lowercase())
    }
}

/// A tokenized query with one case-insensitive matcher per term.
///
/// `matchers[i]` always corresponds to `terms[i]`.
#[derive(Debug, Clone)]
pub struct Query {
    terms: Vec<Term>,
    matchers: Vec<Regex>,
}

impl Query {
    /// Tokenize `raw` and compile its matchers.
    ///
    /// Never fails. If a term's matcher cannot be built (only possible for
    /// pathologically long terms), the query degrades to one that matches
    /// nothing, because the conjunctive test could never be satisfied anyway.
    pub fn parse(raw: &str) -> Self {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let mut terms = Vec::with_capacity(tokens.len());
        let mut matchers = Vec::with_capacity(tokens.len());

        for token in tokens {
            let term = Term::from_token(token);
            match build_matcher(token, &term) {
                Ok(matcher) => {
                    terms.push(term);
                    matchers.push(matcher);
                }
                Err(err) => {
                    warn!(term = %term, error = %err, "term matcher rejected; query cannot match");
                    return Self {
                        terms: Vec::new(),
                        matchers: Vec::new(),
                    };
                }
            }
        }

        Self { terms, matchers }
    }

    /// The query's terms, in the order they were typed.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The matcher for `terms()[index]`.
    pub fn matcher(&self, index: usize) -> &Regex {
        &self.matchers[index]
    }

    pub fn matchers(&self) -> &[Regex] {
        &self.matchers
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// True when there is nothing to search for.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Does every term appear (case-insensitively) somewhere in `text`?
    ///
    /// This is the proximity validity test. An empty query is vacuously
    /// satisfied, but an empty query also produces no occurrences, so it
    /// never gets this far.
    #[inline]
    pub fn all_present(&self, text: &str) -> bool {
        self.matchers.iter().all(|matcher| matcher.is_match(text))
    }
}

/// `token` is the term as typed. When lowercasing changed more than case
/// folding can undo, both spellings become alternatives, typed form first.
fn build_matcher(token: &str, term: &Term) -> Result<Regex, regex::Error> {
    let pattern = if token == term.as_str() {
        regex::escape(term)
    } else {
        format!("{}|{}", regex::escape(token), regex::escape(term))
    };
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .size_limit(MATCHER_SIZE_LIMIT)
        .build()
}
