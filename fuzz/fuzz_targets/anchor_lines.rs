// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for page and section anchor resolution.
//!
//! Any byte offset, any marker, any content. The resolver must clamp to the
//! content and to char boundaries on its own.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use locus::search::anchor::{anchor_line, marker_before};

#[derive(Arbitrary, Debug)]
struct Input {
    content: String,
    marker: String,
    at: u16,
}

fuzz_target!(|input: Input| {
    let at = input.at as usize;

    // INVARIANT 1: never panics, even off the end or mid-character
    let found = marker_before(&input.content, &input.marker, at);
    let line = anchor_line(&input.content, &input.marker, at);

    match found {
        Some(pos) => {
            // INVARIANT 2: the marker really is there and starts at or before `at`
            assert!(pos <= at);
            assert!(input.content[pos..].starts_with(input.marker.as_str()));
            // INVARIANT 3: the line starts with the marker (modulo trimming)
            if !input.marker.contains('\n') {
                assert!(line.starts_with(input.marker.trim()));
            }
        }
        None => assert!(line.is_empty()),
    }

    assert!(!line.contains('\n'));
});
