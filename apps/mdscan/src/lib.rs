//! mdscan core library.
//!
//! This crate exposes programmatic APIs for scanning a tree of markdown
//! documents and producing link or page reports in CSV and markdown form.
//!
//! High-level modules:
//! - `scan`: Markdown file discovery under a root.
//! - `extract`: Per-document facts (word count, links, relative path, times).
//! - `classify`: Link direction and domain key.
//! - `assemble`: Ordering, mode re-sort, and page deduplication.
//! - `render`: CSV and outline renderers plus the scoped file write.
//! - `pipeline`: End-to-end run for a resolved configuration.
//! - `config`: Discovery and effective configuration resolution.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `output`: Human/JSON printers for the run summary.
//! - `models`: Documents, records, report mode and order policy.
//! - `timestamp`: Timestamp value and the injectable probe.
pub mod assemble;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod logging;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod render;
pub mod scan;
pub mod timestamp;
pub mod utils;

pub use error::ReportError;
