//! Markdown document discovery under a scan root.
//!
//! Walks every subdirectory and yields `.md`/`.markdown` files. Entries are
//! visited in file-name order within each directory so repeated scans of an
//! unchanged tree produce the same sequence.

use crate::error::ReportError;
use glob::Pattern;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const EXTENSIONS: [&str; 2] = ["md", "markdown"];

pub struct Scanner {
    root: PathBuf,
    exclude: Vec<Pattern>,
    skip_dirs: Vec<PathBuf>,
}

impl Scanner {
    /// Fails with `DirectoryNotFound` unless `root` is an existing directory.
    /// A relative root is made absolute against the working directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ReportError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ReportError::DirectoryNotFound(root));
        }
        let root = std::path::absolute(&root).unwrap_or(root);
        Ok(Self {
            root,
            exclude: Vec::new(),
            skip_dirs: Vec::new(),
        })
    }

    /// Skip files whose root-relative path matches any of `patterns`.
    pub fn with_excludes(mut self, patterns: Vec<Pattern>) -> Self {
        self.exclude = patterns;
        self
    }

    /// Do not descend into `dir`. Used to keep report output out of the scan.
    pub fn skip_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.skip_dirs.push(std::path::absolute(&dir).unwrap_or(dir));
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily enumerate eligible files.
    pub fn files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |e| !self.skip_dirs.iter().any(|d| e.path() == d))
            .filter_map(|entry| match entry {
                Ok(e) => Some(e),
                Err(err) => {
                    warn!("skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|e| e.path().is_file() && is_markdown(e.path()))
            .filter(move |e| {
                let rel = crate::extract::relative_path(e.path(), &self.root);
                let skip = self.exclude.iter().any(|p| p.matches(&rel));
                if skip {
                    debug!("excluded by pattern: {}", rel);
                }
                !skip
            })
            .map(|e| e.into_path())
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}
