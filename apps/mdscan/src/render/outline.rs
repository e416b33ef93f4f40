//! Outline (markdown) rendering.
//!
//! Page indexes get a title, a total line, and group headings (first letter
//! or folder levels). Link reports get a title, an optional domain summary,
//! and a heading whenever the per-record header changes.

use super::Renderer;
use crate::models::{OrderPolicy, Record, Report, ReportMode};
use crate::utils::{encode_path, letter_group};

#[derive(Debug, Default, Clone, Copy)]
pub struct OutlineRenderer;

impl Renderer for OutlineRenderer {
    fn extension(&self) -> &'static str {
        "md"
    }

    fn render(&self, report: &Report<'_>) -> String {
        match report.mode {
            ReportMode::PagesAlphabetical => render_alphabetical(report),
            ReportMode::PagesByFolder => render_by_folder(report),
            ReportMode::LinksExternal | ReportMode::LinksInternal => render_links(report),
        }
    }
}

fn page_preamble(report: &Report<'_>) -> String {
    format!(
        "# {}\n\n{} total pages\n\n",
        report.mode.title(),
        report.records.len()
    )
}

fn push_page_bullet(out: &mut String, record: &Record<'_>) {
    let doc = record.document();
    out.push_str(&format!(
        "- [{}]({})\n",
        doc.display_name(),
        encode_path(&doc.relative_path)
    ));
}

fn render_alphabetical(report: &Report<'_>) -> String {
    let mut out = page_preamble(report);
    let mut current = String::new();
    for record in &report.records {
        let letter = letter_group(&record.document().filename);
        if letter != current {
            out.push_str(&format!("\n## {}\n", letter));
            current = letter;
        }
        push_page_bullet(&mut out, record);
    }
    out
}

fn render_by_folder(report: &Report<'_>) -> String {
    let mut out = page_preamble(report);
    let mut tracked: [String; 3] = Default::default();
    for record in &report.records {
        let folders = record.document().folders();
        for level in 0..tracked.len() {
            let seg = folders[level];
            if seg == tracked[level] {
                continue;
            }
            tracked[level] = seg.to_string();
            for deeper in tracked.iter_mut().skip(level + 1) {
                deeper.clear();
            }
            if !seg.is_empty() {
                out.push_str(&format!("\n{} {}\n", "#".repeat(level + 2), seg));
            }
        }
        push_page_bullet(&mut out, record);
    }
    out
}

/// Heading label of a link record under the given order policy.
pub fn header_for(record: &Record<'_>, order: OrderPolicy) -> String {
    match order {
        OrderPolicy::Domain => record.domain().to_string(),
        OrderPolicy::CreationNewest => record.document().created_at.date(),
        OrderPolicy::ModifiedNewest => record.document().modified_at.date(),
        OrderPolicy::Default => String::new(),
    }
}

/// Number of times the header changes from one record to the next,
/// starting from an empty header. Non-adjacent repeats count again.
pub fn header_transitions(report: &Report<'_>) -> usize {
    let mut current = String::new();
    let mut count = 0;
    for record in &report.records {
        let header = header_for(record, report.order);
        if header != current {
            count += 1;
            current = header;
        }
    }
    count
}

fn render_links(report: &Report<'_>) -> String {
    let mut out = format!("# {}\n\n", report.mode.title());
    if report.order == OrderPolicy::Domain {
        out.push_str(&format!(
            "{} URLs from {} domains\n\n",
            report.records.len(),
            header_transitions(report)
        ));
    }
    let mut current = String::new();
    for record in &report.records {
        let header = header_for(record, report.order);
        if !header.is_empty() && header != current {
            if !current.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("## {}\n", header));
            current = header;
        }
        let url = record.url();
        out.push_str(&format!(
            "- [{}]({}) - []({})\n",
            url,
            url,
            encode_path(&record.document().relative_path)
        ));
    }
    out
}
