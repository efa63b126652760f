//! Integration tests for segmentation plus export, against synthetic
//! benchmark text.

use benchsift::{export, segment_text};

const SAMPLE: &str = "18.10.9.1 Ensure Example Setting is Enabled (Automated)\n\
Profile Applicability: \n\
\u{2022}  Level 1 (L1) \n\
Description: \n\
Controls the example setting. \n\
Rationale: \n\
Reduces attack surface. \n\
Remediation: \n\
Set the policy to Enabled: \n\
Computer Configuration\\Policies \n\
Default Value: \n\
Disabled. \n\
References: \n\
https://example.com/policy\n\
CIS Controls:\n\
Page 512\n";

#[test]
fn json_export_round_trips_with_contract_keys() {
    let items = segment_text(SAMPLE);
    assert_eq!(items.len(), 1);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    export::write_json(&items, &path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    // 2-space indentation, array of objects.
    assert!(json.starts_with("[\n  {"));
    assert!(json.contains("  \"name\""));

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let record = &parsed[0];
    assert_eq!(
        record["name"],
        "18.10.9.1 Ensure Example Setting is Enabled"
    );
    assert_eq!(record["level"], "Level 1 (L1)");
    assert_eq!(record["description"], "Controls the example setting.");
    assert_eq!(record["rationale"], "Reduces attack surface.");
    assert_eq!(record["impact"], "");
    assert_eq!(record["audit"], "");
    assert_eq!(
        record["remediations"],
        "Set the policy to Enabled: \nComputer Configuration\\Policies \n"
    );
    assert_eq!(record["default value"], "Disabled.");
    assert_eq!(record["references"], "https://example.com/policy");
}

#[test]
fn xlsx_export_writes_a_workbook() {
    let items = segment_text(SAMPLE);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");
    export::write_xlsx(&items, &path).unwrap();

    let meta = std::fs::metadata(&path).unwrap();
    assert!(meta.len() > 0);
}

#[test]
fn empty_record_list_still_exports() {
    let dir = tempfile::tempdir().unwrap();

    let json_path = dir.path().join("empty.json");
    export::write_json(&[], &json_path).unwrap();
    assert_eq!(std::fs::read_to_string(&json_path).unwrap(), "[]");

    let xlsx_path = dir.path().join("empty.xlsx");
    export::write_xlsx(&[], &xlsx_path).unwrap();
    assert!(xlsx_path.exists());
}
