//! Per-document fact extraction: word count, links, relative path, and
//! timestamps.

use crate::classify::Direction;
use crate::error::ReportError;
use crate::models::{Document, Link, ReportMode, ScannedDocument};
use crate::timestamp::{Timestamp, TimestampProbe};
use log::debug;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static MD_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").unwrap());
static BARE_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://[^\s)]+").unwrap());

// Word count passes, applied in this order.
static WC_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static WC_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());
static WC_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^#+\s.*$").unwrap());
static WC_NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Builds `ScannedDocument`s for one run.
pub struct Extractor<'p> {
    root: PathBuf,
    mode: ReportMode,
    probe: &'p dyn TimestampProbe,
}

impl<'p> Extractor<'p> {
    pub fn new(root: impl Into<PathBuf>, mode: ReportMode, probe: &'p dyn TimestampProbe) -> Self {
        Self {
            root: root.into(),
            mode,
            probe,
        }
    }

    /// Read `path` and extract its facts. Invalid UTF-8 is replaced rather
    /// than rejected; only I/O failures produce a `Read` error.
    pub fn extract(&self, path: &Path) -> Result<ScannedDocument, ReportError> {
        let bytes = fs::read(path).map_err(|e| ReportError::read(path, e))?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(self.extract_content(path, &content))
    }

    /// Extraction over already-loaded content.
    pub fn extract_content(&self, path: &Path, content: &str) -> ScannedDocument {
        let filename = path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let created_at = self.probe.created(path).unwrap_or_else(|| {
            debug!("no creation time for {}, using epoch", path.display());
            Timestamp::epoch()
        });
        let modified_at = self.probe.modified(path).unwrap_or_else(|| {
            debug!("no modification time for {}, using epoch", path.display());
            Timestamp::epoch()
        });
        let links = match self.mode {
            ReportMode::LinksExternal => extract_links(content, Direction::External),
            ReportMode::LinksInternal => extract_links(content, Direction::Internal),
            ReportMode::PagesAlphabetical | ReportMode::PagesByFolder => Vec::new(),
        };
        ScannedDocument {
            document: Document {
                path: path.to_path_buf(),
                relative_path: relative_path(path, &self.root),
                filename,
                created_at,
                modified_at,
                word_count: count_words(content),
            },
            links,
        }
    }
}

/// Count words after removing link targets, bare URLs, and heading lines.
pub fn count_words(content: &str) -> usize {
    let s = WC_LINK.replace_all(content, "$1");
    let s = WC_URL.replace_all(&s, "");
    let s = WC_HEADING.replace_all(&s, "");
    let s = WC_NON_WORD.replace_all(&s, " ");
    s.split_whitespace().count()
}

/// Links of the requested direction, markdown links first, then bare URLs.
///
/// Bare URLs are only collected for external links and are skipped when
/// directly preceded by `(` or `[`, which marks them as part of a markdown
/// link already counted.
pub fn extract_links(content: &str, direction: Direction) -> Vec<Link> {
    let mut links = Vec::new();
    for cap in MD_LINK.captures_iter(content) {
        let name = cap[1].trim();
        let url = cap[2].trim();
        if Direction::of(url) != direction {
            continue;
        }
        links.push(Link {
            url: url.to_string(),
            name: if name == url { String::new() } else { name.to_string() },
        });
    }
    if direction == Direction::External {
        let mut pos = 0;
        while let Some(m) = BARE_URL.find_at(content, pos) {
            let before = content[..m.start()].chars().next_back();
            if matches!(before, Some('(') | Some('[')) {
                pos = m.start() + 1;
                continue;
            }
            links.push(Link {
                url: m.as_str().trim().to_string(),
                name: String::new(),
            });
            pos = m.end();
        }
    }
    links
}

/// Root-relative path with forward slashes and no leading/trailing slash.
pub fn relative_path(path: &Path, root: &Path) -> String {
    let rel = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    rel.to_string_lossy()
        .replace('\\', "/")
        .trim_matches('/')
        .to_string()
}
