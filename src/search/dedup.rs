// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stable structural deduplication of previews.
//!
//! Neighboring occurrences of a term usually produce the same window, and a
//! multi-term query visits the same region once per term. Those previews are
//! identical and should show up once.
//!
//! `PreviewSet` compares the whole `(snippet, page_line, section_line)` triple.
//! Deduplicating on the snippet alone would merge identical text that sits
//! under different pages; deduplicating on position would keep copies the
//! reader can't tell apart.
//!
//! **Invariant**: no two previews in the output are equal, and survivors keep
//! the order in which they were first inserted.

use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::types::Preview;

/// Insertion-ordered set of previews.
///
/// Each preview is stored exactly once. Lookups bucket by hash and confirm by
/// full equality, so a hash collision can never drop a distinct preview.
#[derive(Debug, Default)]
pub struct PreviewSet {
    previews: Vec<Preview>,
    buckets: HashMap<u64, Vec<usize>>,
    hasher: RandomState,
}

impl PreviewSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set with room for `capacity` unique previews.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            previews: Vec::with_capacity(capacity),
            buckets: HashMap::with_capacity(capacity),
            hasher: RandomState::new(),
        }
    }

    /// Insert a preview unless an equal one is already present.
    ///
    /// Returns `true` if the preview was new.
    pub fn insert(&mut self, preview: Preview) -> bool {
        let hash = self.hasher.hash_one(&preview);
        let bucket = self.buckets.entry(hash).or_default();
        if bucket.iter().any(|&idx| self.previews[idx] == preview) {
            return false;
        }
        bucket.push(self.previews.len());
        self.previews.push(preview);
        true
    }

    /// Insert many previews, in order.
    pub fn extend(&mut self, previews: impl IntoIterator<Item = Preview>) {
        for preview in previews {
            self.insert(preview);
        }
    }

    pub fn contains(&self, preview: &Preview) -> bool {
        let hash = self.hasher.hash_one(preview);
        self.buckets
            .get(&hash)
            .is_some_and(|bucket| bucket.iter().any(|&idx| &self.previews[idx] == preview))
    }

    pub fn len(&self) -> usize {
        self.previews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.previews.is_empty()
    }

    /// The unique previews, in first-insertion order.
    pub fn into_vec(self) -> Vec<Preview> {
        self.previews
    }
}

/// Stable dedup of a complete preview list.
pub fn dedup_previews(previews: Vec<Preview>) -> Vec<Preview> {
    let mut set = PreviewSet::with_capacity(previews.len());
    set.extend(previews);
    set.into_vec()
}
