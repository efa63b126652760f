//! JSON and spreadsheet export.

use std::fs;
use std::path::Path;

use benchsift_core::BenchmarkItem;
use rust_xlsxwriter::Workbook;

use crate::error::ConvertError;

/// Column headers in output order, matching the JSON key names.
const HEADERS: [&str; 9] = [
    "name",
    "level",
    "description",
    "rationale",
    "impact",
    "audit",
    "remediations",
    "default value",
    "references",
];

/// Write the records as a pretty-printed JSON array (2-space indentation).
pub fn write_json(items: &[BenchmarkItem], path: &Path) -> Result<(), ConvertError> {
    let json = serde_json::to_string_pretty(items)?;
    fs::write(path, json)?;
    Ok(())
}

/// Write the records as a spreadsheet: a header row with an empty corner
/// cell, then one row per record with a leading 0-based index column.
pub fn write_xlsx(items: &[BenchmarkItem], path: &Path) -> Result<(), ConvertError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in HEADERS.iter().enumerate() {
        sheet.write(0, col as u16 + 1, *header)?;
    }

    for (index, item) in items.iter().enumerate() {
        let row = index as u32 + 1;
        sheet.write(row, 0, index as u32)?;
        let fields = [
            &item.name,
            &item.level,
            &item.description,
            &item.rationale,
            &item.impact,
            &item.audit,
            &item.remediation,
            &item.default_value,
            &item.references,
        ];
        for (col, value) in fields.iter().enumerate() {
            sheet.write(row, col as u16 + 1, value.as_str())?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
