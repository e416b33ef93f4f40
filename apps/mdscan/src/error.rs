//! Error taxonomy for scanning, extraction, and report writing.
//!
//! `DirectoryNotFound` and `Config` abort a run. `Read` is recovered per
//! document by the pipeline. `Write` fails only the output it belongs to.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("directory not found or not a directory: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl ReportError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
