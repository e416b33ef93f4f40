//! Tabular (CSV) rendering. One header row, one row per record.

use super::Renderer;
use crate::models::{Record, Report, ReportMode};
use std::borrow::Cow;

const PAGE_HEADERS: &[&str] = &[
    "file",
    "source_file",
    "creation_date",
    "modified_date",
    "word_count",
];
const FOLDER_HEADERS: &[&str] = &[
    "file",
    "folder1",
    "folder2",
    "folder3",
    "folder4",
    "source_file",
    "creation_date",
    "modified_date",
    "word_count",
];
const LINK_HEADERS: &[&str] = &[
    "domain",
    "file",
    "url",
    "link_name",
    "source_file",
    "creation_date",
    "modified_date",
    "word_count",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct TableRenderer;

impl Renderer for TableRenderer {
    fn extension(&self) -> &'static str {
        "csv"
    }

    fn render(&self, report: &Report<'_>) -> String {
        let mut out = String::new();
        push_row(&mut out, headers(report.mode).iter().copied());
        for record in &report.records {
            let doc = record.document();
            let created = doc.created_at.to_string();
            let modified = doc.modified_at.to_string();
            let words = doc.word_count.to_string();
            let mut fields: Vec<&str> = Vec::with_capacity(9);
            match record {
                Record::Link(l) => {
                    fields.extend([
                        l.domain.as_str(),
                        doc.filename.as_str(),
                        l.url.as_str(),
                        l.display_name.as_str(),
                    ]);
                }
                Record::Page(_) => {
                    fields.push(&doc.filename);
                    if report.mode == ReportMode::PagesByFolder {
                        fields.extend(doc.folders());
                    }
                }
            }
            fields.extend([
                doc.relative_path.as_str(),
                created.as_str(),
                modified.as_str(),
                words.as_str(),
            ]);
            push_row(&mut out, fields.into_iter());
        }
        out
    }
}

fn headers(mode: ReportMode) -> &'static [&'static str] {
    match mode {
        ReportMode::LinksExternal | ReportMode::LinksInternal => LINK_HEADERS,
        ReportMode::PagesAlphabetical => PAGE_HEADERS,
        ReportMode::PagesByFolder => FOLDER_HEADERS,
    }
}

fn push_row<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>) {
    for (i, f) in fields.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape(f));
    }
    out.push('\n');
}

/// Quote a field when it contains the delimiter, a quote, or a line break.
pub fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
