use mdscan::config::Effective;
use mdscan::models::{OrderPolicy, ReportMode};
use mdscan::pipeline::run;
use mdscan::timestamp::{Timestamp, TimestampProbe};
use mdscan::ReportError;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

type Times = (&'static str, &'static str);

/// Timestamps keyed by file name; unknown files fall back to the epoch.
struct FixedTimes(HashMap<&'static str, Times>);

impl FixedTimes {
    fn lookup(&self, path: &Path, pick: fn(&Times) -> &'static str) -> Option<Timestamp> {
        let name = path.file_name()?.to_str()?;
        self.0.get(name).and_then(|t| Timestamp::parse(pick(t)))
    }
}

impl TimestampProbe for FixedTimes {
    fn created(&self, path: &Path) -> Option<Timestamp> {
        self.lookup(path, |t| t.0)
    }
    fn modified(&self, path: &Path) -> Option<Timestamp> {
        self.lookup(path, |t| t.1)
    }
}

fn probe() -> FixedTimes {
    FixedTimes(HashMap::from([
        ("alpha.md", ("2024-01-03 10:00:00", "2024-02-01 00:00:00")),
        ("beta.md", ("2024-01-01 09:00:00", "2024-03-01 00:00:00")),
        ("a.md", ("2024-01-02 08:00:00", "2024-01-02 08:00:00")),
    ]))
}

/// notes/
///   alpha.md            links to b.com, a.com, b.com and an internal page
///   projects/beta.md    one bare URL, one internal link
///   projects/x/a.md
///   zeta/a.md           same filename as projects/x/a.md
fn tree() -> TempDir {
    let dir = tempdir().unwrap();
    let notes = dir.path().join("notes");
    fs::create_dir_all(notes.join("projects/x")).unwrap();
    fs::create_dir_all(notes.join("zeta")).unwrap();
    fs::write(
        notes.join("alpha.md"),
        "# Alpha\nSee [B one](https://www.b.com/1) and [A](https://a.com/x).\n\
         Later [B two](https://b.com/2), plus [beta](projects/beta.md).\n",
    )
    .unwrap();
    fs::write(
        notes.join("projects/beta.md"),
        "Read https://c.org/page today. Back to [alpha](../alpha.md).\n",
    )
    .unwrap();
    fs::write(notes.join("projects/x/a.md"), "first a").unwrap();
    fs::write(notes.join("zeta/a.md"), "second a").unwrap();
    fs::write(notes.join("ignored.txt"), "https://nope.com").unwrap();
    dir
}

fn effective(dir: &Path, mode: ReportMode, order: OrderPolicy) -> Effective {
    Effective {
        repo_root: dir.to_path_buf(),
        config_path: None,
        root: dir.join("notes"),
        mode,
        order,
        out_dir: dir.join("exports"),
        output: "json".into(),
        csv: true,
        md: true,
        exclude: Vec::new(),
    }
}

fn read(eff: &Effective, ext: &str) -> String {
    fs::read_to_string(eff.output_path(ext)).unwrap()
}

#[test]
fn external_links_by_domain() {
    let dir = tree();
    let eff = effective(dir.path(), ReportMode::LinksExternal, OrderPolicy::Domain);
    let summary = run(&eff, &probe()).unwrap();
    assert_eq!(summary.documents, 4);
    assert_eq!(summary.records, 4);
    assert_eq!(summary.failed_outputs(), 0);

    assert_eq!(
        read(&eff, "md"),
        "# External Links\n\n4 URLs from 3 domains\n\n\
         ## a.com\n- [https://a.com/x](https://a.com/x) - [](alpha.md)\n\
         \n## b.com\n- [https://b.com/2](https://b.com/2) - [](alpha.md)\n\
         - [https://www.b.com/1](https://www.b.com/1) - [](alpha.md)\n\
         \n## c.org\n- [https://c.org/page](https://c.org/page) - [](projects/beta.md)\n"
    );
    let csv = read(&eff, "csv");
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines[0],
        "domain,file,url,link_name,source_file,creation_date,modified_date,word_count"
    );
    assert_eq!(
        lines[1],
        "a.com,alpha.md,https://a.com/x,A,alpha.md,2024-01-03 10:00:00,2024-02-01 00:00:00,10"
    );
    assert_eq!(
        lines[4],
        "c.org,beta.md,https://c.org/page,,projects/beta.md,2024-01-01 09:00:00,2024-03-01 00:00:00,5"
    );
}

#[test]
fn internal_links_keep_scan_order() {
    let dir = tree();
    let eff = effective(dir.path(), ReportMode::LinksInternal, OrderPolicy::Default);
    run(&eff, &probe()).unwrap();
    assert_eq!(
        read(&eff, "md"),
        "# Internal Links\n\n\
         - [projects/beta.md](projects/beta.md) - [](alpha.md)\n\
         - [../alpha.md](../alpha.md) - [](projects/beta.md)\n"
    );
    let csv = read(&eff, "csv");
    assert!(csv.lines().nth(1).unwrap().starts_with(",alpha.md,projects/beta.md,beta,"));
}

#[test]
fn modified_newest_headers_use_dates() {
    let dir = tree();
    let eff = effective(dir.path(), ReportMode::LinksExternal, OrderPolicy::ModifiedNewest);
    run(&eff, &probe()).unwrap();
    let md = read(&eff, "md");
    assert!(md.starts_with("# External Links\n\n## 2024-03-01\n- [https://c.org/page]"));
    assert!(md.contains("\n\n## 2024-02-01\n"));
    assert!(!md.contains("URLs from"));
}

#[test]
fn alphabetical_pages_dedupe_duplicate_filenames() {
    let dir = tree();
    let eff = effective(dir.path(), ReportMode::PagesAlphabetical, OrderPolicy::Default);
    let summary = run(&eff, &probe()).unwrap();
    assert_eq!(summary.records, 3);
    assert_eq!(
        read(&eff, "md"),
        "# Pages\n\n3 total pages\n\n\
         \n## A\n- [a](projects/x/a.md)\n- [alpha](alpha.md)\n\
         \n## B\n- [beta](projects/beta.md)\n"
    );
    assert_eq!(
        read(&eff, "csv"),
        "file,source_file,creation_date,modified_date,word_count\n\
         a.md,projects/x/a.md,2024-01-02 08:00:00,2024-01-02 08:00:00,2\n\
         alpha.md,alpha.md,2024-01-03 10:00:00,2024-02-01 00:00:00,10\n\
         beta.md,projects/beta.md,2024-01-01 09:00:00,2024-03-01 00:00:00,5\n"
    );
}

#[test]
fn pages_by_folder_groups_nested_headings() {
    let dir = tree();
    let eff = effective(dir.path(), ReportMode::PagesByFolder, OrderPolicy::Default);
    let summary = run(&eff, &probe()).unwrap();
    assert_eq!(summary.records, 3);
    assert_eq!(
        read(&eff, "md"),
        "# Pages by Folder\n\n3 total pages\n\n\
         - [alpha](alpha.md)\n\
         \n## projects\n- [beta](projects/beta.md)\n\
         \n### x\n- [a](projects/x/a.md)\n"
    );
    let csv = read(&eff, "csv");
    assert_eq!(
        csv.lines().nth(3).unwrap(),
        "a.md,projects,x,,,projects/x/a.md,2024-01-02 08:00:00,2024-01-02 08:00:00,2"
    );
}

#[test]
fn csv_and_outline_agree_on_record_count() {
    for mode in [
        ReportMode::LinksExternal,
        ReportMode::LinksInternal,
        ReportMode::PagesAlphabetical,
        ReportMode::PagesByFolder,
    ] {
        let dir = tree();
        let eff = effective(dir.path(), mode, OrderPolicy::Domain);
        let summary = run(&eff, &probe()).unwrap();
        let csv_rows = read(&eff, "csv").lines().count() - 1;
        let bullets = read(&eff, "md").lines().filter(|l| l.starts_with("- [")).count();
        assert_eq!(csv_rows, summary.records, "{mode}");
        assert_eq!(bullets, summary.records, "{mode}");
    }
}

#[test]
fn second_run_is_byte_identical() {
    let dir = tree();
    let eff = effective(dir.path(), ReportMode::PagesAlphabetical, OrderPolicy::Default);
    let eff = Effective {
        out_dir: dir.path().join("notes/exports"),
        ..eff
    };
    run(&eff, &probe()).unwrap();
    let (csv1, md1) = (read(&eff, "csv"), read(&eff, "md"));
    let summary = run(&eff, &probe()).unwrap();
    assert_eq!(summary.documents, 4);
    assert_eq!(read(&eff, "csv"), csv1);
    assert_eq!(read(&eff, "md"), md1);
}

#[test]
fn empty_tree_yields_empty_reports() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("notes")).unwrap();
    let eff = effective(dir.path(), ReportMode::LinksExternal, OrderPolicy::Domain);
    let summary = run(&eff, &probe()).unwrap();
    assert_eq!(summary.records, 0);
    assert_eq!(read(&eff, "md"), "# External Links\n\n0 URLs from 0 domains\n\n");
    assert_eq!(read(&eff, "csv").lines().count(), 1);
}

#[test]
fn missing_root_aborts() {
    let dir = tempdir().unwrap();
    let eff = effective(dir.path(), ReportMode::PagesAlphabetical, OrderPolicy::Default);
    assert!(matches!(
        run(&eff, &probe()),
        Err(ReportError::DirectoryNotFound(_))
    ));
    assert!(!eff.export_dir().exists());
}

#[test]
fn failed_csv_write_still_writes_outline() {
    let dir = tree();
    let eff = effective(dir.path(), ReportMode::PagesAlphabetical, OrderPolicy::Default);
    // A directory where the CSV file should go makes that write fail.
    fs::create_dir_all(eff.output_path("csv")).unwrap();
    let summary = run(&eff, &probe()).unwrap();
    assert_eq!(summary.failed_outputs(), 1);
    assert!(!summary.outputs[0].written);
    assert!(summary.outputs[1].written);
    assert!(read(&eff, "md").starts_with("# Pages\n"));
}

#[test]
fn disabled_outputs_are_not_written() {
    let dir = tree();
    let eff = Effective {
        csv: false,
        ..effective(dir.path(), ReportMode::PagesAlphabetical, OrderPolicy::Default)
    };
    let summary = run(&eff, &probe()).unwrap();
    assert_eq!(summary.outputs.len(), 1);
    assert!(!eff.output_path("csv").exists());
    assert!(eff.output_path("md").exists());
}
