//! Error type for the conversion pipeline.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Content-level
//! misparses are not errors: a structurally deviant document silently
//! produces wrong or empty fields, which is why the output carries a
//! manual-review caveat.

use thiserror::Error;

/// Errors surfaced while converting a benchmark PDF to JSON/XLSX.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// PDF text extraction failed (corrupt, encrypted, or unreadable file).
    #[error("text extraction failed: {0}")]
    Extract(#[from] pdf_extract::OutputError),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the records to JSON failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the spreadsheet failed.
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}
