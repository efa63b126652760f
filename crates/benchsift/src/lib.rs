//! benchsift: extract benchmark items from CIS benchmark PDFs.
//!
//! # Architecture
//!
//! - **benchsift-core**: the segmentation state machine and cleanup rules
//! - **benchsift** (this crate): PDF text extraction, inspection artifacts,
//!   and JSON/XLSX export
//! - **benchsift-cli**: the `benchsift` command-line binary
//!
//! The pipeline is strictly sequential: extract the text, segment it, write
//! the outputs. The extracted output is documented as requiring manual
//! review; item boundaries are heuristic and tuned to the CIS benchmark
//! layout.

pub mod error;
pub mod export;
pub mod extract;

pub use benchsift_core::{BenchmarkItem, Section, Segmenter, segment_text};
pub use error::ConvertError;
