//! Report renderers and the scoped file write shared by both formats.
//!
//! - `table`: delimited rows (CSV).
//! - `outline`: grouped markdown document.

pub mod outline;
pub mod table;

pub use outline::OutlineRenderer;
pub use table::TableRenderer;

use crate::error::ReportError;
use crate::models::Report;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One output encoding of an assembled report.
pub trait Renderer {
    /// File extension of the rendered output, without the dot.
    fn extension(&self) -> &'static str;
    fn render(&self, report: &Report<'_>) -> String;
}

/// Render `report` and write it to `path` in one scoped operation.
///
/// Returns the number of bytes written.
pub fn write_report(
    renderer: &dyn Renderer,
    report: &Report<'_>,
    path: &Path,
) -> Result<usize, ReportError> {
    let body = renderer.render(report);
    let mut file = File::create(path).map_err(|e| ReportError::write(path, e))?;
    file.write_all(body.as_bytes())
        .and_then(|_| file.flush())
        .map_err(|e| ReportError::write(path, e))?;
    Ok(body.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OrderPolicy, ReportMode};

    #[test]
    fn test_write_report_into_missing_dir_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let report = Report {
            mode: ReportMode::PagesAlphabetical,
            order: OrderPolicy::Default,
            records: Vec::new(),
        };
        let bad = dir.path().join("missing/out.csv");
        let err = write_report(&TableRenderer, &report, &bad).unwrap_err();
        assert!(matches!(err, ReportError::Write { path, .. } if path == bad));

        let good = dir.path().join("out.md");
        let n = write_report(&OutlineRenderer, &report, &good).unwrap();
        assert_eq!(std::fs::read_to_string(&good).unwrap().len(), n);
    }
}
