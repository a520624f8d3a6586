use std::fs;
use std::path::{Path, PathBuf};

use scanrun_common::config::Config;
use scanrun_common::scan::target::ScanTarget;

/// Drops an executable shell script into `dir` that behaves like a scanner:
/// it writes a minimal XML report to the `-oX` path and exits with `exit_code`.
pub fn fake_scanner(dir: &Path, exit_code: i32) -> PathBuf {
    let path = dir.join("nmap");
    let script = format!(
        "#!/bin/sh\n\
         printf '<nmaprun args=\"%s\"/>\\n' \"$*\" > \"$4\"\n\
         echo 'Starting Nmap'\n\
         exit {exit_code}\n"
    );
    fs::write(&path, script).expect("write fake scanner");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod");
    }

    path
}

pub fn config(dir: &Path, tool: &Path, target: &str) -> Config {
    Config {
        target: ScanTarget::from(target),
        tool: tool.to_string_lossy().into_owned(),
        xml_out: dir.join("nmap_results.xml"),
        summary_out: dir.join("nmap_summary.json"),
        ..Config::default()
    }
}
