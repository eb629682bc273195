// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the search pipeline.
//!
//! Debug-mode assertions for the invariants the pipeline promises:
//!
//! 1. **Zero-cost in release builds** (everything is `debug_assert!`)
//! 2. **Early failure detection** in tests and fuzzing
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function            | Invariant                                      |
//! |------------------------------|------------------------------------------------|
//! | `check_occurrence_valid`     | `start < end ≤ len`, on char boundaries        |
//! | `check_window_valid`         | `start ≤ end ≤ len`, on char boundaries        |
//! | `check_window_covers`        | window contains its anchoring occurrence       |
//! | `check_all_terms_present`    | every term occurs in a validated window        |
//! | `check_previews_unique`      | no structural duplicates in a result           |

use crate::query::Query;
use crate::types::{Occurrence, Preview, Window};

// ============================================================================
// OFFSET CONTRACTS
// ============================================================================

/// Check that an occurrence lies inside `content` on char boundaries.
#[inline]
pub fn check_occurrence_valid(content: &str, occurrence: &Occurrence) {
    debug_assert!(
        occurrence.start < occurrence.end && occurrence.end <= content.len(),
        "Contract violation: occurrence {}..{} outside content of length {}",
        occurrence.start,
        occurrence.end,
        content.len()
    );
    debug_assert!(
        content.is_char_boundary(occurrence.start) && content.is_char_boundary(occurrence.end),
        "Contract violation: occurrence {}..{} splits a character",
        occurrence.start,
        occurrence.end
    );
}

/// Check that a window is clipped to `content` and on char boundaries.
#[inline]
pub fn check_window_valid(content: &str, window: &Window) {
    debug_assert!(
        window.start <= window.end && window.end <= content.len(),
        "Contract violation: window {}..{} not clipped to content length {}",
        window.start,
        window.end,
        content.len()
    );
    debug_assert!(
        content.is_char_boundary(window.start) && content.is_char_boundary(window.end),
        "Contract violation: window {}..{} splits a character",
        window.start,
        window.end
    );
}

/// Check that a window contains the occurrence it was built around.
#[inline]
pub fn check_window_covers(window: &Window, occurrence: &Occurrence) {
    debug_assert!(
        window.start <= occurrence.start && occurrence.end <= window.end,
        "Contract violation: window {}..{} does not cover occurrence {}..{}",
        window.start,
        window.end,
        occurrence.start,
        occurrence.end
    );
}

// ============================================================================
// MATCH CONTRACTS
// ============================================================================

/// Check that every query term occurs in a validated window.
#[inline]
pub fn check_all_terms_present(query: &Query, text: &str) {
    if cfg!(debug_assertions) {
        for (term, matcher) in query.terms().iter().zip(query.matchers()) {
            debug_assert!(
                matcher.is_match(text),
                "Contract violation: term '{}' missing from accepted window",
                term
            );
        }
    }
}

/// Check that a preview list holds no structural duplicates.
#[inline]
pub fn check_previews_unique(previews: &[Preview]) {
    if cfg!(debug_assertions) {
        for (i, a) in previews.iter().enumerate() {
            for b in &previews[i + 1..] {
                debug_assert!(
                    a != b,
                    "Contract violation: duplicate preview {:?}",
                    a.snippet
                );
            }
        }
    }
}
