//! CLI argument parsing via `clap`.

use crate::config::Overrides;
use crate::models::{OrderPolicy, ReportMode};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "mdscan",
    version,
    about = "Markdown link and page reports",
    long_about = "mdscan: scan a tree of markdown files and export link or page reports as CSV and markdown.\n\nConfiguration precedence: CLI > mdscan.toml > defaults.",
    after_help = "Examples:\n  mdscan report --root notes --mode links_external --order domain\n  mdscan report --mode pages_byfolder --no-csv\n  mdscan report --output json",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current mdscan version.")]
    Version,
    /// Scan and write reports
    #[command(
        about = "Write link or page reports",
        long_about = "Scan .md/.markdown files under the root and write {out_dir}/{mode}/{mode}.csv and .md.",
        after_help = "Modes: links_external, links_internal, pages_alpha, pages_byfolder\nOrders: default, creation_newest, modified_newest, domain"
    )]
    Report {
        #[arg(long, help = "Project root used for mdscan.toml discovery (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Directory to scan (default: project root)")]
        root: Option<String>,
        #[arg(long, value_enum, help = "Report mode (default: pages_alpha)")]
        mode: Option<ReportMode>,
        #[arg(long, value_enum, help = "Ordering policy (default: default)")]
        order: Option<OrderPolicy>,
        #[arg(long, help = "Output base directory (default: exports)")]
        out_dir: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Skip the CSV output")]
        no_csv: bool,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Skip the markdown output")]
        no_md: bool,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}

impl Commands {
    /// CLI overrides for config resolution; `None` for non-report commands.
    pub fn overrides(&self) -> Option<Overrides> {
        match self {
            Commands::Version => None,
            Commands::Report {
                repo_root,
                root,
                mode,
                order,
                out_dir,
                no_csv,
                no_md,
                output,
            } => Some(Overrides {
                repo_root: repo_root.clone(),
                root: root.clone(),
                mode: *mode,
                order: *order,
                out_dir: out_dir.clone(),
                output: output.clone(),
                no_csv: *no_csv,
                no_md: *no_md,
            }),
        }
    }
}
