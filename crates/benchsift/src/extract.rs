//! PDF-to-text extraction and inspection artifacts.

use std::fs;
use std::path::Path;

use crate::error::ConvertError;

/// Raw extracted text, written to the working directory.
pub const RAW_TEXT_FILE: &str = "cis_text.txt";
/// The raw text with blank lines removed, written purely for easier manual
/// inspection. The segmenter does not consume this copy.
pub const STRIPPED_TEXT_FILE: &str = "text.txt";

/// Extract the full text of `input` and write the two inspection artifacts
/// next to the process working directory.
///
/// Returns the raw text. The segmenter must see the raw form: blank lines
/// carry the paragraph-break information the cleanup rules rely on.
pub fn extract_text(input: &Path) -> Result<String, ConvertError> {
    let text = pdf_extract::extract_text(input)?;
    #[cfg(feature = "tracing")]
    tracing::debug!(bytes = text.len(), "extracted benchmark text");

    fs::write(RAW_TEXT_FILE, &text)?;
    fs::write(STRIPPED_TEXT_FILE, strip_blank_lines(&text))?;
    Ok(text)
}

/// Remove blank lines, keeping every non-blank line with its newline.
pub fn strip_blank_lines(text: &str) -> String {
    text.split_inclusive('\n')
        .filter(|line| !line.trim().is_empty())
        .collect()
}
