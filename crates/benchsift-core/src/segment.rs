//! The line segmentation state machine.

use regex::Regex;

use crate::cleanup;
use crate::item::BenchmarkItem;
use crate::section::{Section, marker};

/// Proper bullet glyph used by applicability lists.
const BULLET: &str = "\u{2022}  ";
/// The same glyph as cp1252 mojibake, seen in tika-era text exports.
const BULLET_MOJIBAKE: &str = "\u{E2}\u{20AC}\u{A2}  ";

/// Accumulators for the item currently being assembled.
///
/// Reset by reconstruction (`ItemDraft::default()`) rather than by clearing
/// fields one at a time.
#[derive(Debug, Default)]
struct ItemDraft {
    name: String,
    level: String,
    description: String,
    rationale: String,
    impact: String,
    audit: String,
    remediation: String,
    default_value: String,
    references: String,
}

impl ItemDraft {
    /// Apply the per-field cleanup rules and produce the sealed record.
    fn seal(&self) -> BenchmarkItem {
        BenchmarkItem {
            name: cleanup::drop_blank_line_pairs(&self.name),
            level: cleanup::single_space_lines(&self.level),
            description: cleanup::reflow_paragraphs(&self.description),
            rationale: cleanup::reflow_paragraphs(&self.rationale),
            impact: cleanup::reflow_paragraphs(&self.impact),
            audit: cleanup::reflow_paragraphs(&self.audit),
            // No reflow here: remediation text usually holds registry paths
            // or command blocks where line structure is meaningful.
            remediation: self.remediation.clone(),
            default_value: cleanup::reflow_paragraphs(&self.default_value),
            references: cleanup::trim_trailing(&self.references),
        }
    }
}

/// Segments a stream of extracted text lines into [`BenchmarkItem`] records.
///
/// Feed lines in document order — each with its trailing `\n` — via
/// [`push_line`](Segmenter::push_line), then collect the sealed records with
/// [`finish`](Segmenter::finish). An item starts at a line matching the
/// three-group numeric pattern (`18.10.9.1 ...`), accumulates field text as
/// section markers switch the current [`Section`], and is sealed at the
/// `CIS Controls:` terminator. Malformed input never errors: unmatched lines
/// join whatever section is current, or are dropped when no item is active.
pub struct Segmenter {
    /// Three dot-separated groups of one or two digits at the line start.
    /// The pattern occasionally fires on body text that wraps onto a
    /// numeric prefix; the known false-positive class is accepted rather
    /// than papered over with extra heuristics.
    item_start: Regex,
    section: Section,
    active: bool,
    skip_to_page_break: bool,
    draft: ItemDraft,
    items: Vec<BenchmarkItem>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter {
    pub fn new() -> Self {
        Self {
            item_start: Regex::new(r"^\d{1,2}\.\d{1,2}\.\d{1,2}")
                .expect("item-start pattern is a valid literal"),
            section: Section::None,
            active: false,
            skip_to_page_break: false,
            draft: ItemDraft::default(),
            items: Vec::new(),
        }
    }

    /// Process one line. Lines must keep their trailing `\n`.
    pub fn push_line(&mut self, line: &str) {
        if self.skip_to_page_break {
            // Discard boilerplate after an item until pagination noise
            // marks the end of the page. The page line itself is dropped
            // too, by the unconditional check below.
            if line.contains(marker::PAGE) {
                self.skip_to_page_break = false;
            }
            return;
        }
        // Page header/footer noise never reaches a field.
        if line.contains(marker::PAGE) {
            return;
        }

        if self.item_start.is_match(line) {
            // A new start while an item is open silently discards the
            // unterminated partial.
            self.draft = ItemDraft::default();
            self.active = true;
            self.section = Section::Name;
        }

        if !self.active {
            return;
        }

        if line.contains(marker::BLANK_SECTION) || line.contains(marker::SECTION_DIVIDER) {
            // Blank filler pages and part dividers look like item starts but
            // are not items; abandon without sealing.
            self.draft = ItemDraft::default();
            self.active = false;
            self.section = Section::None;
            return;
        }

        if let Some(section) = Section::detect(line) {
            self.section = section;
        }

        if line.contains(marker::TERMINATOR) {
            self.items.push(self.draft.seal());
            self.draft = ItemDraft::default();
            self.active = false;
            self.section = Section::None;
            self.skip_to_page_break = true;
            return;
        }

        self.accumulate(line);
    }

    /// Consume the segmenter, returning sealed records in document order.
    pub fn finish(self) -> Vec<BenchmarkItem> {
        self.items
    }

    /// Append the line to the current section's accumulator, stripping the
    /// section's own label when the line is the bare `Label: ` marker.
    fn accumulate(&mut self, line: &str) {
        match self.section {
            Section::None => {}
            Section::Name => {
                let stripped = line.replace(" (Automated)", "").replace("(Automated)", "");
                self.draft.name.push_str(&stripped);
            }
            Section::Level => {
                let stripped = line
                    .replace("Profile Applicability: \n", "")
                    .replace(BULLET, "")
                    .replace(BULLET_MOJIBAKE, "")
                    .replace(" \n", "\n");
                self.draft.level.push_str(&stripped);
            }
            Section::Description => {
                push_label_stripped(&mut self.draft.description, line, marker::DESCRIPTION);
            }
            Section::Rationale => {
                push_label_stripped(&mut self.draft.rationale, line, marker::RATIONALE);
            }
            Section::Impact => {
                push_label_stripped(&mut self.draft.impact, line, marker::IMPACT);
            }
            Section::Audit => {
                push_label_stripped(&mut self.draft.audit, line, marker::AUDIT);
            }
            Section::Remediation => {
                push_label_stripped(&mut self.draft.remediation, line, marker::REMEDIATION);
            }
            Section::DefaultValue => {
                push_label_stripped(&mut self.draft.default_value, line, marker::DEFAULT_VALUE);
            }
            Section::References => {
                // Only URLs count as references; surrounding prose and
                // footnote numbering are dropped.
                if line.starts_with("http") {
                    self.draft.references.push_str(line);
                }
            }
        }
    }
}

fn push_label_stripped(field: &mut String, line: &str, label: &str) {
    field.push_str(&line.replace(&format!("{label} \n"), ""));
}

/// Segment a full text dump in one call.
///
/// Lines are split inclusive of their trailing newline, which is the form
/// [`Segmenter::push_line`] expects.
pub fn segment_text(text: &str) -> Vec<BenchmarkItem> {
    let mut segmenter = Segmenter::new();
    for line in text.split_inclusive('\n') {
        segmenter.push_line(line);
    }
    segmenter.finish()
}
