use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use tempfile::TempDir;

/// Scratch directory holding a stand-in scanner and the output paths handed to it.
pub struct TestEnv {
    tmp: TempDir,
    pub xml: PathBuf,
    pub summary: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let xml = tmp.path().join("nmap_results.xml");
        let summary = tmp.path().join("nmap_summary.json");
        Self { tmp, xml, summary }
    }

    pub fn dir(&self) -> &Path {
        self.tmp.path()
    }

    /// Writes a shell script that records its arguments into the `-oX` file,
    /// prints one line on each stream and exits with `exit_code`.
    pub fn fake_scanner(&self, exit_code: i32) -> PathBuf {
        let path = self.tmp.path().join("fake-nmap");
        let script = format!(
            "#!/bin/sh\n\
             printf '%s\\n' \"$*\" > \"$4\"\n\
             echo 'Nmap done: 256 IP addresses'\n\
             echo 'scanner complaint' >&2\n\
             exit {exit_code}\n"
        );
        fs::write(&path, script).expect("write fake scanner");
        make_executable(&path);
        path
    }

    pub fn cmd(&self, scanner: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("scanrun");
        cmd.current_dir(self.dir())
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1")
            .arg("--nmap")
            .arg(scanner)
            .arg("--xml-out")
            .arg(&self.xml)
            .arg("--summary-out")
            .arg(&self.summary);
        cmd
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).expect("chmod fake scanner");
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
