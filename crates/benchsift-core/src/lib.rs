//! benchsift-core: I/O-independent data types and algorithms.
//!
//! This crate provides the [`BenchmarkItem`] record, the [`Segmenter`] state
//! machine that carves a flat stream of extracted text lines into records,
//! and the seal-time [`cleanup`] rules. It knows nothing about PDFs or output
//! files — callers feed it lines and collect records.

pub mod cleanup;
pub mod item;
pub mod section;
pub mod segment;

pub use item::BenchmarkItem;
pub use section::Section;
pub use segment::{Segmenter, segment_text};
