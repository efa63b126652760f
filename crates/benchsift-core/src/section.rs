//! Section vocabulary of the benchmark text and the marker strings that
//! switch between sections.

/// Literal marker strings as they appear in the extracted text.
pub mod marker {
    /// Switches to [`Section::Level`](super::Section::Level).
    pub const LEVEL: &str = "Profile Applicability:";
    /// Switches to [`Section::Description`](super::Section::Description).
    pub const DESCRIPTION: &str = "Description:";
    /// Switches to [`Section::Rationale`](super::Section::Rationale).
    pub const RATIONALE: &str = "Rationale:";
    /// Switches to [`Section::Impact`](super::Section::Impact).
    pub const IMPACT: &str = "Impact:";
    /// Switches to [`Section::Audit`](super::Section::Audit). Matched only
    /// at the line start: the string shows up inside item prose on a
    /// handful of benchmarks.
    pub const AUDIT: &str = "Audit:";
    /// Switches to [`Section::Remediation`](super::Section::Remediation).
    pub const REMEDIATION: &str = "Remediation:";
    /// Switches to [`Section::DefaultValue`](super::Section::DefaultValue).
    pub const DEFAULT_VALUE: &str = "Default Value:";
    /// Switches to [`Section::References`](super::Section::References).
    pub const REFERENCES: &str = "References:";
    /// Normal item terminator. Items without a References section reach
    /// this marker directly.
    pub const TERMINATOR: &str = "CIS Controls:";
    /// A numbered heading whose body is a blank filler page, not an item.
    pub const BLANK_SECTION: &str =
        "This section is intentionally blank and exists to ensure";
    /// A numbered heading that introduces a part of the document, not an item.
    pub const SECTION_DIVIDER: &str = "This section contains";
    /// Page header/footer noise; also ends a skip-to-page-break run.
    pub const PAGE: &str = "Page ";
}

/// Which field of the in-progress item subsequent lines belong to.
///
/// Exactly one section is current at a time; marker lines switch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    /// Not inside any field (before an item starts, or after its terminator).
    #[default]
    None,
    /// The item's number/title line(s).
    Name,
    /// Profile applicability entries.
    Level,
    /// Description body.
    Description,
    /// Rationale body.
    Rationale,
    /// Impact body.
    Impact,
    /// Audit procedure body.
    Audit,
    /// Remediation steps.
    Remediation,
    /// Default value body.
    DefaultValue,
    /// Reference URLs.
    References,
}

impl Section {
    /// Detect a section switch on this line.
    ///
    /// All markers are substring matches except `Audit:`, which is anchored
    /// at the line start. When a line somehow carries more than one marker
    /// the last one in vocabulary order wins, matching the reference tool's
    /// sequential checks.
    pub fn detect(line: &str) -> Option<Section> {
        let mut found = None;
        if line.contains(marker::LEVEL) {
            found = Some(Section::Level);
        }
        if line.contains(marker::DESCRIPTION) {
            found = Some(Section::Description);
        }
        if line.contains(marker::RATIONALE) {
            found = Some(Section::Rationale);
        }
        if line.contains(marker::IMPACT) {
            found = Some(Section::Impact);
        }
        if line.starts_with(marker::AUDIT) {
            found = Some(Section::Audit);
        }
        if line.contains(marker::REMEDIATION) {
            found = Some(Section::Remediation);
        }
        if line.contains(marker::DEFAULT_VALUE) {
            found = Some(Section::DefaultValue);
        }
        if line.contains(marker::REFERENCES) {
            found = Some(Section::References);
        }
        found
    }
}
