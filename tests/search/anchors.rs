//! Page and section anchor resolution.

use crate::common::{make_doc, make_paged_doc, previews_for, previews_with};
use locus::search::anchor::{anchor_line, marker_before};
use locus::SearchOptions;

#[test]
fn test_nearest_preceding_page_wins() {
    let doc = make_paged_doc(
        1,
        &[("1", "1.1", "intro"), ("2", "2.1", "more"), ("3", "3.1", "the needle")],
    );
    let previews = previews_for(&doc, "needle");
    assert_eq!(previews.len(), 1);
    assert_eq!(previews[0].page_line, "Page 3");
    assert_eq!(previews[0].section_line, "Section 3.1");
}

#[test]
fn test_anchors_follow_each_occurrence() {
    let filler = "lorem ipsum ".repeat(20);
    let doc = make_paged_doc(
        1,
        &[
            ("1", "A", &format!("{} needle", filler)),
            ("2", "B", &format!("{} needle", filler)),
        ],
    );
    let previews = previews_for(&doc, "needle");
    let anchors: Vec<(&str, &str)> = previews
        .iter()
        .map(|p| (p.page_line.as_str(), p.section_line.as_str()))
        .collect();
    assert_eq!(anchors, vec![("Page 1", "Section A"), ("Page 2", "Section B")]);
}

#[test]
fn test_marker_after_match_is_ignored() {
    let previews = previews_for(&make_doc(1, "needle first\nPage 9\nSection 9"), "needle");
    assert_eq!(previews[0].page_line, "");
    assert_eq!(previews[0].section_line, "");
}

#[test]
fn test_marker_starting_at_match_counts() {
    let previews = previews_for(&make_doc(1, "Page 5 summary"), "page");
    assert_eq!(previews[0].page_line, "Page 5 summary");
}

#[test]
fn test_marker_mid_line_takes_rest_of_line() {
    let previews = previews_for(&make_doc(1, "see Page 4 for details\nthe needle"), "needle");
    assert_eq!(previews[0].page_line, "Page 4 for details");
}

#[test]
fn test_anchor_line_is_trimmed() {
    let previews = previews_for(&make_doc(1, "  Page 3   \r\nSection 2\t\nneedle"), "needle");
    assert_eq!(previews[0].page_line, "Page 3");
    assert_eq!(previews[0].section_line, "Section 2");
}

#[test]
fn test_anchor_on_last_line_runs_to_end() {
    let previews = previews_for(&make_doc(1, "Page 9 needle"), "needle");
    assert_eq!(previews[0].page_line, "Page 9 needle");
}

#[test]
fn test_markers_are_case_sensitive() {
    let previews = previews_for(&make_doc(1, "page 3\nsection 2\nneedle"), "needle");
    assert_eq!(previews[0].page_line, "");
    assert_eq!(previews[0].section_line, "");
}

#[test]
fn test_custom_markers() {
    let doc = make_doc(1, "Seite 12\nKapitel 4\nDie Nadel");
    let options = SearchOptions::default().with_markers("Seite", "Kapitel");
    let previews = previews_with(&doc, "nadel", &options);
    assert_eq!(previews[0].page_line, "Seite 12");
    assert_eq!(previews[0].section_line, "Kapitel 4");
}

#[test]
fn test_empty_marker_resolves_to_empty_line() {
    let doc = make_doc(1, "Page 1\nneedle");
    let options = SearchOptions::default().with_markers("", "");
    let previews = previews_with(&doc, "needle", &options);
    assert_eq!(previews[0].page_line, "");
    assert_eq!(previews[0].section_line, "");
}

#[test]
fn test_marker_before_limits() {
    let content = "Page 1 then Page 2";
    assert_eq!(marker_before(content, "Page", 0), Some(0));
    assert_eq!(marker_before(content, "Page", 11), Some(0));
    assert_eq!(marker_before(content, "Page", 12), Some(12));
    assert_eq!(marker_before(content, "Page", 1000), Some(12));
    assert_eq!(marker_before("", "Page", 0), None);
}

#[test]
fn test_anchor_line_multibyte() {
    let content = "Page ü\nSection ñ\nnaïve needle";
    let at = content.find("needle").unwrap_or_default();
    assert_eq!(anchor_line(content, "Page", at), "Page ü");
    assert_eq!(anchor_line(content, "Section", at), "Section ñ");
}
