//! Report assembly: collect records, apply the ordering policy, re-sort per
//! report mode, and deduplicate pages.
//!
//! The steps run in a fixed order and every sort is stable, so the policy
//! order survives as the tie-breaker of the mode re-sort.

use crate::classify::{extract_domain, Direction};
use crate::models::{
    LinkRecord, OrderPolicy, PageRecord, Record, Report, ReportMode, ScannedDocument,
};
use crate::utils::{cmp_ignore_case, letter_group};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Run every assembly step over the scanned documents.
pub fn assemble(docs: &[ScannedDocument], mode: ReportMode, order: OrderPolicy) -> Report<'_> {
    let mut records = collect(docs, mode);
    apply_order(&mut records, order);
    apply_mode_sort(&mut records, mode);
    let records = dedupe(records, mode);
    Report {
        mode,
        order,
        records,
    }
}

/// One flat record sequence: a record per link in link modes, a record per
/// document in page modes.
pub fn collect(docs: &[ScannedDocument], mode: ReportMode) -> Vec<Record<'_>> {
    if !mode.is_link_mode() {
        return docs
            .iter()
            .map(|sd| Record::Page(PageRecord { document: &sd.document }))
            .collect();
    }
    docs.iter()
        .flat_map(|sd| {
            sd.links.iter().map(move |l| {
                let is_external = Direction::of(&l.url) == Direction::External;
                Record::Link(LinkRecord {
                    document: &sd.document,
                    url: l.url.clone(),
                    display_name: l.name.clone(),
                    domain: if is_external {
                        extract_domain(&l.url)
                    } else {
                        String::new()
                    },
                    is_external,
                })
            })
        })
        .collect()
}

pub fn apply_order(records: &mut [Record<'_>], order: OrderPolicy) {
    match order {
        OrderPolicy::Default => {}
        OrderPolicy::CreationNewest => records.sort_by(|a, b| {
            b.document().created_at.cmp(&a.document().created_at)
        }),
        OrderPolicy::ModifiedNewest => records.sort_by(|a, b| {
            b.document().modified_at.cmp(&a.document().modified_at)
        }),
        OrderPolicy::Domain => records.sort_by(|a, b| {
            cmp_ignore_case(a.domain(), b.domain()).then_with(|| cmp_ignore_case(a.url(), b.url()))
        }),
    }
}

pub fn apply_mode_sort(records: &mut [Record<'_>], mode: ReportMode) {
    match mode {
        ReportMode::PagesAlphabetical => records.sort_by(cmp_alphabetical),
        ReportMode::PagesByFolder => records.sort_by(cmp_by_folder),
        ReportMode::LinksExternal | ReportMode::LinksInternal => {}
    }
}

/// Letter group first, so every group is contiguous in the outline, then
/// the whole filename. Distinct groups that fold to the same lowercase are
/// kept apart by their raw key.
fn cmp_alphabetical(a: &Record<'_>, b: &Record<'_>) -> Ordering {
    let (na, nb) = (&a.document().filename, &b.document().filename);
    let (ga, gb) = (letter_group(na), letter_group(nb));
    cmp_ignore_case(&ga, &gb)
        .then_with(|| ga.cmp(&gb))
        .then_with(|| cmp_ignore_case(na, nb))
}

/// Lexicographic over the first three folder levels, then filename.
fn cmp_by_folder(a: &Record<'_>, b: &Record<'_>) -> Ordering {
    let (da, db) = (a.document(), b.document());
    let (fa, fb) = (da.folders(), db.folders());
    fa.iter()
        .zip(fb.iter())
        .take(3)
        .map(|(x, y)| cmp_ignore_case(x, y))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
        .then_with(|| cmp_ignore_case(&da.filename, &db.filename))
}

/// Page modes keep the first record per filename; link modes are untouched.
///
/// "First" means first in the mode-sorted sequence. For by-folder reports
/// that is the copy in the folder that sorts first, which is not always the
/// copy the scan reached first.
pub fn dedupe(records: Vec<Record<'_>>, mode: ReportMode) -> Vec<Record<'_>> {
    if mode.is_link_mode() {
        return records;
    }
    let mut seen: HashSet<String> = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.document().filename.clone()))
        .collect()
}
