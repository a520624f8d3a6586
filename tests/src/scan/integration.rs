#![cfg(unix)]
use std::fs;

use scanrun_core::ScanError;
use scanrun_core::runner::ProcessRunner;
use scanrun_core::scanner;
use serde_json::Value;

use crate::utils::{config, fake_scanner};

/// Runs the whole sequence against a real child process standing in for nmap.
#[test]
fn scan_with_real_process() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let tool = fake_scanner(dir.path(), 0);
    let cfg = config(dir.path(), &tool, "192.168.0.0/24");

    let summary = scanner::run_scan(&cfg, &ProcessRunner)?;

    assert_eq!(summary.scanned.as_str(), "192.168.0.0/24");
    assert_eq!(summary.xml_file, cfg.xml_file());

    let xml = fs::read_to_string(&cfg.xml_out)?;
    assert!(
        xml.contains(&format!("-T4 -F -oX {} 192.168.0.0/24", cfg.xml_file())),
        "unexpected scanner arguments: {xml}"
    );

    let json: Value = serde_json::from_str(&fs::read_to_string(&cfg.summary_out)?)?;
    assert_eq!(json["scanned"], "192.168.0.0/24");
    assert_eq!(json["xml_file"], cfg.xml_file());
    Ok(())
}

#[test]
fn failing_process_reports_code_and_skips_summary() {
    let dir = tempfile::tempdir().unwrap();
    let tool = fake_scanner(dir.path(), 42);
    let cfg = config(dir.path(), &tool, "10.0.0.0/8");

    let err = scanner::run_scan(&cfg, &ProcessRunner).unwrap_err();

    match err {
        ScanError::ToolFailed { code, stdout, .. } => {
            assert_eq!(code, 42);
            assert_eq!(stdout, "Starting Nmap\n");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!cfg.summary_out.exists());
}

#[test]
fn absent_scanner_is_a_spawn_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path(), &dir.path().join("missing-nmap"), "10.0.0.0/8");

    let err = scanner::run_scan(&cfg, &ProcessRunner).unwrap_err();

    assert!(matches!(err, ScanError::Spawn { .. }), "got {err:?}");
    assert!(!cfg.summary_out.exists());
}
