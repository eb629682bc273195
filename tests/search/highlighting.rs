//! Highlight rendering in both modes.
//!
//! Sequential mode rewrites the snippet once per query term, in query order,
//! so a later term sees the markup added for earlier ones. Merged mode finds
//! every span in the untouched snippet first and renders once.

use crate::common::{make_doc, plain, previews_with};
use locus::{highlight, highlight_spans, HighlightMode, Marker, Query, SearchOptions};

fn sequential(raw: &str, query: &str) -> String {
    highlight(raw, &Query::parse(query), HighlightMode::Sequential, &Marker::default())
}

fn merged(raw: &str, query: &str) -> String {
    highlight(raw, &Query::parse(query), HighlightMode::Merged, &Marker::default())
}

// ============================================================================
// SEQUENTIAL
// ============================================================================

#[test]
fn test_sequential_wraps_every_occurrence() {
    assert_eq!(
        sequential("one two one", "one"),
        "<mark>one</mark> two <mark>one</mark>"
    );
}

#[test]
fn test_sequential_later_term_matches_inside_markup() {
    assert_eq!(
        sequential("mark the needle", "needle mark"),
        "<mark>mark</mark> the <<mark>mark</mark>>needle</<mark>mark</mark>>"
    );
}

#[test]
fn test_sequential_earlier_markup_masks_overlap() {
    // "bcd" no longer appears once "abc" has been wrapped.
    assert_eq!(sequential("abcd", "abc bcd"), "<mark>abc</mark>d");
}

#[test]
fn test_sequential_is_default_for_search() {
    let doc = make_doc(1, "abcd");
    let previews = previews_with(&doc, "abc bcd", &SearchOptions::default());
    assert_eq!(previews[0].snippet, "<mark>abc</mark>d");
}

// ============================================================================
// MERGED
// ============================================================================

#[test]
fn test_merged_joins_overlapping_spans() {
    assert_eq!(merged("abcd", "abc bcd"), "<mark>abcd</mark>");
}

#[test]
fn test_merged_ignores_marker_text() {
    assert_eq!(
        merged("mark the needle", "needle mark"),
        "<mark>mark</mark> the <mark>needle</mark>"
    );
}

#[test]
fn test_merged_strips_back_to_raw() {
    let raw = "Alpha beta ALPHA gamma alphabet";
    assert_eq!(plain(&merged(raw, "alpha beta")), raw);
}

#[test]
fn test_highlight_spans_sorted_and_disjoint() {
    let query = Query::parse("an na");
    let spans = highlight_spans("banana", &query);
    assert_eq!(spans, vec![1..6]);

    let query = Query::parse("b a");
    let spans = highlight_spans("a b a", &query);
    assert_eq!(spans, vec![0..1, 2..3, 4..5]);
}

#[test]
fn test_merged_mode_through_search() {
    let doc = make_doc(1, "abcd");
    let options = SearchOptions::default().with_highlight(HighlightMode::Merged);
    let previews = previews_with(&doc, "abc bcd", &options);
    assert_eq!(previews[0].snippet, "<mark>abcd</mark>");
}

// ============================================================================
// MARKERS AND CASING
// ============================================================================

#[test]
fn test_preserves_matched_casing() {
    assert_eq!(sequential("NeEdLe", "needle"), "<mark>NeEdLe</mark>");
    assert_eq!(merged("NeEdLe", "NEEDLE"), "<mark>NeEdLe</mark>");
}

#[test]
fn test_custom_marker() {
    let marker = Marker {
        open: "[[".to_string(),
        close: "]]".to_string(),
    };
    let query = Query::parse("needle");
    assert_eq!(
        highlight("a needle", &query, HighlightMode::Sequential, &marker),
        "a [[needle]]"
    );
}

#[test]
fn test_marker_dollar_signs_are_literal() {
    let marker = Marker {
        open: "$0<".to_string(),
        close: ">$1".to_string(),
    };
    let query = Query::parse("x");
    assert_eq!(
        highlight("x", &query, HighlightMode::Sequential, &marker),
        "$0<x>$1"
    );
}

#[test]
fn test_regex_metacharacters_in_terms() {
    assert_eq!(sequential("use (a+b)*c here", "(a+b)*c"), "use <mark>(a+b)*c</mark> here");
}
