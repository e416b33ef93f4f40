//! Pipeline entry point: scan, extract, assemble, and write each requested
//! output for one resolved configuration.
//!
//! A missing scan root aborts the run. Unreadable documents are skipped and
//! reported in the summary. Each output is written independently, so a
//! failed CSV write still lets the outline be produced.

use crate::assemble::assemble;
use crate::config::Effective;
use crate::error::ReportError;
use crate::extract::Extractor;
use crate::models::{OrderPolicy, ReportMode, ScannedDocument};
use crate::render::{write_report, OutlineRenderer, Renderer, TableRenderer};
use crate::scan::Scanner;
use crate::timestamp::TimestampProbe;
use log::{debug, info, warn};
use serde::Serialize;
use std::fs;

#[derive(Debug, Clone, Serialize)]
/// A document that could not be read.
pub struct SkippedFile {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
/// Result of one output write.
pub struct OutputResult {
    pub format: String,
    pub path: String,
    pub written: bool,
    pub bytes: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
/// What a run did, for the human and JSON printers.
pub struct RunSummary {
    pub mode: ReportMode,
    pub order: OrderPolicy,
    pub root: String,
    pub documents: usize,
    pub records: usize,
    pub skipped: Vec<SkippedFile>,
    pub outputs: Vec<OutputResult>,
}

impl RunSummary {
    pub fn failed_outputs(&self) -> usize {
        self.outputs.iter().filter(|o| !o.written).count()
    }
}

/// Extract every scanned file, skipping (and recording) unreadable ones.
pub fn scan_documents(
    scanner: &Scanner,
    extractor: &Extractor<'_>,
) -> (Vec<ScannedDocument>, Vec<SkippedFile>) {
    let mut docs = Vec::new();
    let mut skipped = Vec::new();
    for path in scanner.files() {
        match extractor.extract(&path) {
            Ok(sd) => {
                debug!(
                    "scanned {} ({} words, {} links)",
                    sd.document.relative_path,
                    sd.document.word_count,
                    sd.links.len()
                );
                docs.push(sd);
            }
            Err(err) => {
                warn!("{}", err);
                skipped.push(SkippedFile {
                    path: path.to_string_lossy().to_string(),
                    error: err.to_string(),
                });
            }
        }
    }
    (docs, skipped)
}

/// Run the whole pipeline for `eff`.
///
/// Only `DirectoryNotFound` is returned as an error; per-output write
/// failures are recorded in the summary.
pub fn run(eff: &Effective, probe: &dyn TimestampProbe) -> Result<RunSummary, ReportError> {
    let scanner = Scanner::new(&eff.root)?
        .with_excludes(eff.exclude.clone())
        .skip_dir(&eff.out_dir);
    let extractor = Extractor::new(scanner.root(), eff.mode, probe);
    let (docs, skipped) = scan_documents(&scanner, &extractor);
    let report = assemble(&docs, eff.mode, eff.order);
    info!(
        "{}: {} documents, {} records",
        eff.mode,
        docs.len(),
        report.records.len()
    );

    let mut renderers: Vec<&dyn Renderer> = Vec::new();
    if eff.csv {
        renderers.push(&TableRenderer);
    }
    if eff.md {
        renderers.push(&OutlineRenderer);
    }

    let dir = eff.export_dir();
    let dir_result = if renderers.is_empty() {
        Ok(())
    } else {
        fs::create_dir_all(&dir)
    };

    let mut outputs = Vec::with_capacity(renderers.len());
    for renderer in renderers {
        let path = eff.output_path(renderer.extension());
        let result = match &dir_result {
            Ok(()) => write_report(renderer, &report, &path),
            Err(e) => Err(ReportError::write(
                &dir,
                std::io::Error::new(e.kind(), e.to_string()),
            )),
        };
        let entry = match result {
            Ok(bytes) => {
                info!("wrote {}", path.display());
                OutputResult {
                    format: renderer.extension().to_string(),
                    path: path.to_string_lossy().to_string(),
                    written: true,
                    bytes,
                    error: None,
                }
            }
            Err(err) => {
                warn!("{}", err);
                OutputResult {
                    format: renderer.extension().to_string(),
                    path: path.to_string_lossy().to_string(),
                    written: false,
                    bytes: 0,
                    error: Some(err.to_string()),
                }
            }
        };
        outputs.push(entry);
    }

    Ok(RunSummary {
        mode: eff.mode,
        order: eff.order,
        root: scanner.root().to_string_lossy().to_string(),
        documents: docs.len(),
        records: report.records.len(),
        skipped,
        outputs,
    })
}
