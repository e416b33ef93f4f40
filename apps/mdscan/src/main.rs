//! mdscan CLI binary entry point.
//! Resolves configuration, runs the report pipeline, and prints results.

use clap::Parser;
use mdscan::cli::{Cli, Commands};
use mdscan::timestamp::FsTimestamps;
use mdscan::{config, logging, output, pipeline, utils, ReportError};

fn main() {
    logging::initialize();
    let cli = Cli::parse();
    let overrides = match &cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            return;
        }
        cmd @ Commands::Report { .. } => cmd.overrides().unwrap_or_default(),
    };

    let eff = match config::resolve_effective(&overrides) {
        Ok(eff) => eff,
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    };
    if eff.config_path.is_none() && eff.output != "json" {
        eprintln!("{} No mdscan.toml found; using defaults.", utils::note_prefix());
    }
    if !eff.csv && !eff.md {
        eprintln!(
            "{} Both outputs are disabled; scanning without writing.",
            utils::info_prefix()
        );
    }

    let summary = match pipeline::run(&eff, &FsTimestamps) {
        Ok(s) => s,
        Err(e @ ReportError::DirectoryNotFound(_)) => {
            eprintln!(
                "{} {} (pass --root or set root in mdscan.toml)",
                utils::error_prefix(),
                e
            );
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("{} {}", utils::error_prefix(), e);
            std::process::exit(2);
        }
    };
    output::print_run(&summary, &eff.output);
    if summary.failed_outputs() > 0 {
        std::process::exit(1);
    }
}
