use std::process::ExitCode;

use anyhow::Context;
use colored::*;
use scanrun_common::config::Config;
use scanrun_common::scan::summary::ScanSummary;
use scanrun_core::runner::ProcessRunner;
use scanrun_core::{ScanError, scanner};
use tracing::error;

use crate::terminal::{colors, print, spinner};

const KEY_WIDTH: usize = 7;

pub fn scan(cfg: &Config) -> anyhow::Result<ExitCode> {
    print::header("starting scanner", cfg.quiet);
    print_overview(cfg);

    let pb = spinner::start_scan_spinner(cfg.target.as_str(), cfg.quiet);
    let result = scanner::run_scan(cfg, &ProcessRunner);
    spinner::stop(pb);

    match result {
        Ok(summary) => {
            scan_ends(&summary, cfg);
            Ok(ExitCode::SUCCESS)
        }
        Err(ScanError::ToolFailed {
            tool,
            code,
            stdout,
            stderr,
        }) => {
            print::echo_stdout(&stdout);
            print::echo_stderr(&stderr);
            error!("{tool} exited with status {code}");
            Ok(exit_code(code))
        }
        Err(err) => Err(err).context("scan aborted"),
    }
}

fn print_overview(cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }
    print::aligned_line("Target", &cfg.target, KEY_WIDTH);
    print::aligned_line("Scanner", &cfg.tool, KEY_WIDTH);
    print::aligned_line("XML", cfg.xml_out.display(), KEY_WIDTH);
    print::aligned_line("Summary", cfg.summary_out.display(), KEY_WIDTH);
}

fn scan_ends(summary: &ScanSummary, cfg: &Config) {
    print::fat_separator(cfg.quiet);

    let output: String = format!(
        "{} XML: {}  JSON: {}",
        "Scan complete.".green().bold(),
        summary.xml_file.color(colors::ACCENT),
        cfg.summary_out.display().to_string().color(colors::ACCENT)
    );
    print::print(&output);
}

/// Exit codes that don't fit a process status byte become a generic failure.
fn exit_code(code: i32) -> ExitCode {
    status_byte(code).map(ExitCode::from).unwrap_or(ExitCode::FAILURE)
}

fn status_byte(code: i32) -> Option<u8> {
    u8::try_from(code).ok()
}
