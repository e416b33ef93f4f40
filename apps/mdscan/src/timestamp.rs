//! Document timestamps and the probe that supplies them.
//!
//! Creation time is platform dependent, so the pipeline never asks the
//! filesystem directly. It goes through a `TimestampProbe`, which tests can
//! replace with fixed values.

use chrono::{DateTime, Local, NaiveDateTime};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Rendering format used in tabular output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Rendering format used for date headings in outline output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
/// A second-resolution local date-time. Defaults to the Unix epoch.
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// The fallback used whenever a timestamp is missing or unrepresentable.
    pub fn epoch() -> Self {
        Timestamp::default()
    }

    /// Parse `YYYY-MM-DD HH:MM:SS`, returning `None` when malformed.
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
            .ok()
            .map(Timestamp)
    }

    /// Convert a filesystem time to local time. Times before the epoch or
    /// outside chrono's range yield `None`.
    pub fn from_system_time(t: SystemTime) -> Option<Self> {
        let since = t.duration_since(UNIX_EPOCH).ok()?;
        let secs = i64::try_from(since.as_secs()).ok()?;
        let utc = DateTime::from_timestamp(secs, 0)?;
        Some(Timestamp(utc.with_timezone(&Local).naive_local()))
    }

    /// Calendar date part, used as an outline heading.
    pub fn date(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

/// Supplies creation and modification times for a document path.
pub trait TimestampProbe {
    fn created(&self, path: &Path) -> Option<Timestamp>;
    fn modified(&self, path: &Path) -> Option<Timestamp>;
}

/// Reads timestamps from file metadata.
///
/// Filesystems without a birth time fall back to the modification time.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsTimestamps;

impl TimestampProbe for FsTimestamps {
    fn created(&self, path: &Path) -> Option<Timestamp> {
        let meta = fs::metadata(path).ok()?;
        let t = meta.created().or_else(|_| meta.modified()).ok()?;
        Timestamp::from_system_time(t)
    }

    fn modified(&self, path: &Path) -> Option<Timestamp> {
        let t = fs::metadata(path).ok()?.modified().ok()?;
        Timestamp::from_system_time(t)
    }
}
