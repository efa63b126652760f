//! Seal-time field cleanup.
//!
//! PDF text extraction leaves two kinds of newline noise in accumulated
//! fields: line-wrap artifacts (a bare `\n` in the middle of a sentence) and
//! blank lines between paragraphs (a newline run of two or more, usually
//! with a trailing space before each newline). Each rule here is a named
//! transformation over an immutable input, returning a new string, so rules
//! can be tested one at a time. Every rule is idempotent: running it over
//! its own output changes nothing. The rules match whole newline runs,
//! trailing spaces and all, so an extra blank line or a doubled space never
//! leaves residue a second pass would pick up.

use std::sync::OnceLock;

use regex::Regex;

/// Protects newline runs during substitution. U+001F never occurs in
/// benchmark text.
const HOLD: &str = "\u{1F}";

/// A run of one or more newlines, each with optional trailing spaces/tabs
/// before it.
fn newline_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[ \t]*\n(?:[ \t]*\n)*").expect("newline-run pattern is a valid literal")
    })
}

/// A run of two or more newlines — a paragraph break.
fn blank_line_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[ \t]*\n(?:[ \t]*\n)+").expect("blank-line-run pattern is a valid literal")
    })
}

/// Cleanup for the name field: drops the blank-line pairs page layout leaves
/// inside wrapped titles and trims trailing whitespace. Single newlines in
/// multi-line names are kept.
pub fn drop_blank_line_pairs(text: &str) -> String {
    text.replace(" \n\n", "")
        .replace("\n\n", "")
        .trim_end()
        .to_string()
}

/// Cleanup for the level field: collapses every newline run to exactly one
/// newline, so a multi-entry applicability list becomes one entry per line
/// with no blank lines between.
pub fn single_space_lines(text: &str) -> String {
    newline_run().replace_all(text, "\n").trim_end().to_string()
}

/// Cleanup for prose fields: paragraph breaks (newline runs of two or more)
/// are preserved as `"\n\n"` while bare newlines — line-wrap artifacts —
/// are removed, joining wrapped lines into flowing paragraphs.
pub fn reflow_paragraphs(text: &str) -> String {
    blank_line_run()
        .replace_all(text, HOLD)
        .replace('\n', "")
        .replace(HOLD, "\n\n")
        .trim_end()
        .to_string()
}

/// Cleanup for the references field: trailing whitespace only. The lines are
/// already newline-joined in accumulation order.
pub fn trim_trailing(text: &str) -> String {
    text.trim_end().to_string()
}
