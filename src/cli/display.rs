// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the locus CLI.
//!
//! One box per matching document, a labelled row per preview, and matched
//! terms drawn in bold color instead of raw markup. Colors follow the terminal
//! background: `LOCUS_THEME` ("dark" or "light") wins, then the `COLORFGBG`
//! hint some terminals set, otherwise dark.
//!
//! With `NO_COLOR` set or stdout redirected, no escape codes are written at
//! all and matched terms print as plain text. Use `--json` to keep markup.

use std::sync::OnceLock;

use locus::{Document, Marker, SearchResult};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

/// Left margin inside the box for snippet text.
const SNIPPET_INDENT: usize = 2;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// THEME AND COLOR ROLES
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    let explicit = std::env::var("LOCUS_THEME")
        .ok()
        .and_then(|value| match value.to_lowercase().as_str() {
            "light" | "l" => Some(Theme::Light),
            "dark" | "d" => Some(Theme::Dark),
            _ => None,
        });

    explicit
        .or_else(|| {
            std::env::var("COLORFGBG")
                .ok()
                .and_then(|value| theme_from_colorfgbg(&value))
        })
        .unwrap_or(Theme::Dark)
}

/// `COLORFGBG` is "fg;bg", or "fg;default;bg" on some terminals. ANSI
/// backgrounds 7 and 9-15 are the light ones.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    Some(if bg == 7 || bg >= 9 { Theme::Light } else { Theme::Dark })
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// What a piece of output is, rather than which hue it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Box borders and column headings.
    Frame,
    /// The double-line banner around the query summary.
    Banner,
    /// Document name in each result box header.
    Heading,
    /// The query summary line.
    Title,
    /// Page and section labels above a snippet.
    Anchor,
    /// Matched terms inside a snippet.
    Hit,
    /// Marker counts in the inventory.
    Count,
}

impl Role {
    /// OneDark on dark backgrounds, One Light on light ones.
    fn rgb(self, theme: Theme) -> (u8, u8, u8) {
        match (theme, self) {
            (Theme::Dark, Role::Frame) => (92, 99, 112),
            (Theme::Dark, Role::Banner) => (97, 175, 239),
            (Theme::Dark, Role::Heading) => (86, 182, 194),
            (Theme::Dark, Role::Title) => (102, 217, 239),
            (Theme::Dark, Role::Anchor) => (152, 195, 121),
            (Theme::Dark, Role::Hit) => (255, 215, 0),
            (Theme::Dark, Role::Count) => (229, 192, 123),
            (Theme::Light, Role::Frame) => (160, 161, 167),
            (Theme::Light, Role::Banner) => (64, 120, 242),
            (Theme::Light, Role::Heading) => (1, 132, 188),
            (Theme::Light, Role::Title) => (1, 112, 158),
            (Theme::Light, Role::Anchor) => (80, 161, 79),
            (Theme::Light, Role::Hit) => (152, 104, 1),
            (Theme::Light, Role::Count) => (193, 132, 1),
        }
    }

    /// Foreground escape for this role, empty when colors are off.
    fn code(self) -> String {
        if use_colors() {
            truecolor(self.rgb(theme()))
        } else {
            String::new()
        }
    }
}

fn truecolor((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// `RESET` when colors are on, nothing otherwise.
fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Colors are off under `NO_COLOR` and whenever stdout is not a terminal.
pub fn use_colors() -> bool {
    static COLORS: OnceLock<bool> = OnceLock::new();
    *COLORS.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

/// `text` in the role's color with optional modifiers.
pub fn themed(role: Role, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), role.code(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max_chars`, ending with … if anything was dropped
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}

/// Document size as B, KB or MB.
pub fn format_size(bytes: usize) -> String {
    match bytes {
        b if b >= 1024 * 1024 => format!("{:.1} MB", b as f64 / (1024.0 * 1024.0)),
        b if b >= 1024 => format!("{:.1} KB", b as f64 / 1024.0),
        b => format!("{} B", b),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOXES
// ═══════════════════════════════════════════════════════════════════════════

/// A full-width horizontal line: `left`, `fill` × BOX_WIDTH, `right`.
fn rule(role: Role, left: char, fill: &str, right: char) {
    println!("{}{}{}{}{}", role.code(), left, fill.repeat(BOX_WIDTH), right, reset());
}

/// `│ content          │`
pub fn row(content: &str) {
    let border = Role::Frame.code();
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!(
        "{}│{}{}{}{}│{}",
        border,
        reset(),
        content,
        " ".repeat(pad),
        border,
        reset()
    );
}

/// `┌─ LABEL ──────────┐`
pub fn section_top(label: &str) {
    let border = Role::Frame.code();
    let label_part = format!("─ {} ", themed(Role::Heading, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}┌{}{}{}{}┐{}",
        border,
        reset(),
        label_part,
        border,
        "─".repeat(remaining),
        reset()
    );
}

pub fn divider() {
    rule(Role::Frame, '├', "─", '┤');
}

pub fn section_bot() {
    rule(Role::Frame, '└', "─", '┘');
}

/// Double-line box around one centered, bold line.
pub fn banner(text: &str) {
    let colored = themed(Role::Title, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    let border = Role::Banner.code();

    rule(Role::Banner, '╔', "═", '╗');
    println!(
        "{}║{}{}{}{}{}║{}",
        border,
        reset(),
        " ".repeat(left_pad),
        colored,
        " ".repeat(total_pad - left_pad),
        border,
        reset()
    );
    rule(Role::Banner, '╚', "═", '╝');
}

// ═══════════════════════════════════════════════════════════════════════════
// SNIPPETS
// ═══════════════════════════════════════════════════════════════════════════

/// Split a highlighted snippet into characters tagged with "inside markup".
///
/// Nested markers (which sequential highlighting can produce) count by depth.
/// Line breaks and tabs become spaces so the snippet wraps as one paragraph.
pub fn marked_chars(snippet: &str, marker: &Marker) -> Vec<(char, bool)> {
    let mut out = Vec::with_capacity(snippet.len());
    let mut depth = 0usize;
    let mut rest = snippet;

    while let Some(ch) = rest.chars().next() {
        if !marker.open.is_empty() && rest.starts_with(marker.open.as_str()) {
            depth += 1;
            rest = &rest[marker.open.len()..];
        } else if !marker.close.is_empty() && rest.starts_with(marker.close.as_str()) {
            depth = depth.saturating_sub(1);
            rest = &rest[marker.close.len()..];
        } else {
            let shown = if ch.is_whitespace() { ' ' } else { ch };
            out.push((shown, depth > 0));
            rest = &rest[ch.len_utf8()..];
        }
    }
    out
}

/// Render one wrapped line, coloring highlighted runs.
fn render_marked(chars: &[(char, bool)]) -> String {
    let mut out = String::new();
    let mut run = String::new();
    let mut run_marked = false;

    for &(ch, marked) in chars {
        if marked != run_marked && !run.is_empty() {
            push_run(&mut out, &run, run_marked);
            run.clear();
        }
        run_marked = marked;
        run.push(ch);
    }
    push_run(&mut out, &run, run_marked);
    out
}

fn push_run(out: &mut String, run: &str, marked: bool) {
    if marked {
        out.push_str(&themed(Role::Hit, &[BOLD], run));
    } else {
        out.push_str(run);
    }
}

/// Wrap a highlighted snippet to `width` visible characters per line.
pub fn wrap_snippet(snippet: &str, marker: &Marker, width: usize) -> Vec<String> {
    let chars = marked_chars(snippet.trim(), marker);
    chars
        .chunks(width.max(1))
        .map(render_marked)
        .collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// COMMAND OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

/// Header line for one preview: "Page 3 │ Section 2" with blanks elided.
fn anchor_label(page_line: &str, section_line: &str) -> String {
    match (page_line.is_empty(), section_line.is_empty()) {
        (false, false) => format!("{} │ {}", page_line, section_line),
        (false, true) => page_line.to_string(),
        (true, false) => section_line.to_string(),
        (true, true) => "(no page or section)".to_string(),
    }
}

/// Print search results, one box per document.
pub fn print_results(query: &str, results: &[SearchResult], marker: &Marker) {
    if results.is_empty() {
        println!("No documents match your search.");
        return;
    }

    let previews: usize = results.iter().map(|r| r.previews.len()).sum();
    banner(&truncate_chars(
        &format!(
            "\"{}\": {} documents, {} previews",
            query,
            results.len(),
            previews
        ),
        BOX_WIDTH - 2,
    ));

    let text_width = BOX_WIDTH - 2 * SNIPPET_INDENT;
    for result in results {
        let label = format!("{} (#{})", result.document.name, result.document.id);
        section_top(&truncate_chars(&label, BOX_WIDTH - 4));

        for (i, preview) in result.previews.iter().enumerate() {
            if i > 0 {
                divider();
            }
            let anchors = anchor_label(&preview.page_line, &preview.section_line);
            row(&format!(
                " {}",
                themed(Role::Anchor, &[BOLD], &truncate_chars(&anchors, BOX_WIDTH - 2))
            ));
            for line in wrap_snippet(&preview.snippet, marker, text_width) {
                row(&format!("{}{}", " ".repeat(SNIPPET_INDENT), line));
            }
        }
        section_bot();
    }
}

/// Print one row per document with its size and marker counts.
pub fn print_inventory(documents: &[Document], page_marker: &str, section_marker: &str) {
    section_top(&format!("DOCUMENTS ({})", documents.len()));
    row(&themed(
        Role::Frame,
        &[DIM],
        &format!(
            " {}{}{}{}",
            pad_right("name", 38),
            pad_right("id", 14),
            pad_right("size", 12),
            "pages / sections"
        ),
    ));

    for doc in documents {
        let count = |marker: &str| {
            if marker.is_empty() {
                0
            } else {
                doc.content.matches(marker).count()
            }
        };
        row(&format!(
            " {}{}{}{}",
            pad_right(&truncate_chars(&doc.name, 36), 38),
            pad_right(&truncate_chars(&doc.id.to_string(), 12), 14),
            pad_right(&format_size(doc.content.len()), 12),
            themed(
                Role::Count,
                &[],
                &format!("{} / {}", count(page_marker), count(section_marker))
            )
        ));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
