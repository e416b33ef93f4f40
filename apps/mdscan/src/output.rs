//! Output rendering for the run summary.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-output and per-skipped-file entries and a top-level summary.

use crate::pipeline::RunSummary;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print the run summary in the requested format.
pub fn print_run(summary: &RunSummary, output: &str) {
    match output {
        "json" => match serde_json::to_string_pretty(&compose_run_json(summary)) {
            Ok(s) => println!("{}", s),
            Err(e) => eprintln!("{} {}", crate::utils::error_prefix(), e),
        },
        _ => {
            let color = use_colors(output);
            for s in &summary.skipped {
                if color {
                    println!("{} {} ({})", "⏭️  skipped:".yellow().bold(), s.path, s.error);
                } else {
                    println!("⏭️  skipped: {} ({})", s.path, s.error);
                }
            }
            for o in &summary.outputs {
                match (&o.error, color) {
                    (None, true) => println!("{} {}", "📄 wrote:".green().bold(), o.path.bold()),
                    (None, false) => println!("📄 wrote: {}", o.path),
                    (Some(e), true) => println!("{} {} ({})", "✖ failed:".red().bold(), o.path, e),
                    (Some(e), false) => println!("✖ failed: {} ({})", o.path, e),
                }
            }
            let line = format!(
                "— Summary — mode={} order={} documents={} records={} skipped={}",
                summary.mode,
                summary.order,
                summary.documents,
                summary.records,
                summary.skipped.len()
            );
            if color {
                println!("{}", line.bold());
            } else {
                println!("{}", line);
            }
        }
    }
}

/// Compose the run JSON object (pure) for testing/snapshot purposes.
pub fn compose_run_json(summary: &RunSummary) -> JsonVal {
    json!({
        "mode": summary.mode,
        "order": summary.order,
        "root": summary.root,
        "outputs": summary.outputs,
        "skipped": summary.skipped,
        "summary": {
            "documents": summary.documents,
            "records": summary.records,
            "skipped": summary.skipped.len(),
            "failed_outputs": summary.failed_outputs(),
        },
    })
}
