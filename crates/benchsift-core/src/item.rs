/// One benchmark item extracted from the document.
///
/// Every field is free text; a field stays empty when its section never
/// appeared before the item was sealed. The serde key names (note
/// `remediations` and the space in `default value`) are part of the JSON
/// output contract and match the columns of the exported spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkItem {
    /// Item number and title, e.g. `18.10.9.1 Ensure ...`, with the
    /// `(Automated)` annotation stripped.
    pub name: String,
    /// Profile applicability, one entry per line (e.g. `Level 1 (L1) ...`).
    pub level: String,
    /// Description, reflowed into paragraphs.
    pub description: String,
    /// Rationale, reflowed into paragraphs.
    pub rationale: String,
    /// Impact of applying the item, reflowed into paragraphs.
    pub impact: String,
    /// Audit procedure, reflowed into paragraphs.
    pub audit: String,
    /// Remediation steps. Kept with original line breaks: this section
    /// usually holds registry paths or command blocks where line structure
    /// is meaningful.
    #[cfg_attr(feature = "serde", serde(rename = "remediations"))]
    pub remediation: String,
    /// Default value of the setting, reflowed into paragraphs.
    #[cfg_attr(feature = "serde", serde(rename = "default value"))]
    pub default_value: String,
    /// Reference URLs, newline-joined in document order.
    pub references: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_item_is_all_empty() {
        let item = BenchmarkItem::default();
        assert_eq!(item.name, "");
        assert_eq!(item.level, "");
        assert_eq!(item.description, "");
        assert_eq!(item.rationale, "");
        assert_eq!(item.impact, "");
        assert_eq!(item.audit, "");
        assert_eq!(item.remediation, "");
        assert_eq!(item.default_value, "");
        assert_eq!(item.references, "");
    }

    // Run with `--features serde` to cover the key-name contract.
    #[cfg(feature = "serde")]
    #[test]
    fn serde_key_names_match_output_contract() {
        let item = BenchmarkItem {
            name: "1.1.1 Example".to_string(),
            remediation: "do the thing".to_string(),
            default_value: "Disabled".to_string(),
            ..BenchmarkItem::default()
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["remediations"], "do the thing");
        assert_eq!(json["default value"], "Disabled");
        assert_eq!(json["name"], "1.1.1 Example");
        assert!(json.get("remediation").is_none());
        assert!(json.get("default_value").is_none());
    }
}
