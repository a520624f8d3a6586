//! Blocking execution of external programs.
//!
//! [`CommandRunner`] is the seam between the scan sequence and the operating
//! system. [`ProcessRunner`] is the real thing; tests substitute their own.

use std::process::{Command, ExitStatus, Output};

use tracing::{debug, info};

use crate::error::{Result, ScanError};

pub trait CommandRunner {
    /// Runs `command` (program first) to completion and returns its stdout.
    ///
    /// A non-zero exit is reported as [`ScanError::ToolFailed`] carrying both
    /// captured streams.
    fn execute(&self, command: &[String]) -> Result<String>;
}

/// Spawns the program as a child process and waits for it without a timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn execute(&self, command: &[String]) -> Result<String> {
        let (program, args) = command.split_first().ok_or(ScanError::EmptyCommand)?;

        info!("Running: {}", command.join(" "));

        let output: Output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| ScanError::Spawn {
                tool: program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let code = exit_code(output.status);
            debug!(code, "{program} failed");
            return Err(ScanError::ToolFailed {
                tool: program.clone(),
                code,
                stdout,
                stderr,
            });
        }

        debug!(bytes = stdout.len(), "{program} finished");
        for line in stdout.lines() {
            debug!(target: "scanrun::tool", "{line}");
        }

        Ok(stdout)
    }
}

/// Numeric exit status, following the shell convention for signal deaths.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
