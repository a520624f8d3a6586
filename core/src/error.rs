use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no program given to execute")]
    EmptyCommand,

    /// The scanner could not be started at all, typically because it is not installed.
    #[error("failed to launch '{tool}'")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    /// The scanner ran and exited non-zero. Its output is kept so the caller can echo it.
    #[error("'{tool}' exited with status {code}")]
    ToolFailed {
        tool: String,
        code: i32,
        stdout: String,
        stderr: String,
    },

    #[error("failed to write summary to {}", path.display())]
    WriteSummary {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode summary")]
    Encode(#[from] serde_json::Error),
}

impl ScanError {
    /// Exit code reported by the scanner, if that is what failed.
    pub fn tool_exit_code(&self) -> Option<i32> {
        match self {
            ScanError::ToolFailed { code, .. } => Some(*code),
            _ => None,
        }
    }
}
