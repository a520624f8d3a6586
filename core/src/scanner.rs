//! The scan sequence: run the external scanner, then describe its output.
//!
//! Nothing here terminates the process. Every failure comes back as a
//! [`ScanError`](crate::ScanError) and the binary decides what exit code it
//! turns into.

use scanrun_common::config::Config;
use scanrun_common::scan::summary::ScanSummary;
use tracing::info;

use crate::error::Result;
use crate::report;
use crate::runner::CommandRunner;

/// Timing template passed to the scanner.
pub const TIMING_FLAG: &str = "-T4";
/// Restricts the scanner to its list of common ports.
pub const FAST_FLAG: &str = "-F";
pub const XML_OUTPUT_FLAG: &str = "-oX";

/// `<tool> -T4 -F -oX <xml_out> <target>`
pub fn build_command(cfg: &Config) -> Vec<String> {
    vec![
        cfg.tool.clone(),
        TIMING_FLAG.to_string(),
        FAST_FLAG.to_string(),
        XML_OUTPUT_FLAG.to_string(),
        cfg.xml_file(),
        cfg.target.to_string(),
    ]
}

/// Runs the scanner once and writes the summary file.
///
/// If the scanner fails, the summary file is left untouched.
pub fn run_scan<R: CommandRunner + ?Sized>(cfg: &Config, runner: &R) -> Result<ScanSummary> {
    let command: Vec<String> = build_command(cfg);
    runner.execute(&command)?;

    let summary = ScanSummary::new(cfg.target.clone(), cfg.xml_file());
    report::write_summary(&summary, &cfg.summary_out)?;

    info!(range = %cfg.target, "scan finished");
    Ok(summary)
}
