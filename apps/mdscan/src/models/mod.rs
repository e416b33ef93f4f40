//! Shared data models: scanned documents, the records built from them, and
//! the report mode/order selectors.

pub mod mode;

pub use mode::{OrderPolicy, ReportMode};

use crate::timestamp::Timestamp;
use std::path::PathBuf;

/// Number of folder levels kept per page; deeper nesting is truncated.
pub const FOLDER_DEPTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One markdown file found under the scan root.
pub struct Document {
    pub path: PathBuf,
    /// Root-relative, forward-slash separated, no leading/trailing slash.
    pub relative_path: String,
    pub filename: String,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
    pub word_count: usize,
}

impl Document {
    /// Folder segments of the relative path (filename excluded), padded
    /// with empty strings and truncated to `FOLDER_DEPTH`.
    pub fn folders(&self) -> [&str; FOLDER_DEPTH] {
        let mut out = [""; FOLDER_DEPTH];
        let mut segs: Vec<&str> = self.relative_path.split('/').collect();
        segs.pop();
        for (slot, seg) in out.iter_mut().zip(segs) {
            *slot = seg;
        }
        out
    }

    /// Filename without its markdown extension.
    pub fn display_name(&self) -> &str {
        self.filename
            .strip_suffix(".md")
            .or_else(|| self.filename.strip_suffix(".markdown"))
            .unwrap_or(&self.filename)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A link as written in a document, before classification.
pub struct Link {
    pub url: String,
    /// Link text; empty when identical to the url or for bare URLs.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A document together with the links extracted from it.
pub struct ScannedDocument {
    pub document: Document,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord<'a> {
    pub document: &'a Document,
    pub url: String,
    pub display_name: String,
    /// Empty for internal links.
    pub domain: String,
    pub is_external: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord<'a> {
    pub document: &'a Document,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The unit the assembler sorts and the renderers emit.
pub enum Record<'a> {
    Link(LinkRecord<'a>),
    Page(PageRecord<'a>),
}

impl<'a> Record<'a> {
    pub fn document(&self) -> &'a Document {
        match self {
            Record::Link(l) => l.document,
            Record::Page(p) => p.document,
        }
    }

    pub fn domain(&self) -> &str {
        match self {
            Record::Link(l) => &l.domain,
            Record::Page(_) => "",
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Record::Link(l) => &l.url,
            Record::Page(_) => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The final, ordered record sequence for one mode/order selection.
pub struct Report<'a> {
    pub mode: ReportMode,
    pub order: OrderPolicy,
    pub records: Vec<Record<'a>>,
}
