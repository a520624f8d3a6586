use std::path::PathBuf;

use crate::scan::target::ScanTarget;

/// Address range scanned when no target is given.
pub const DEFAULT_TARGET: &str = "192.168.0.0/24";
/// Scanner executable looked up on `PATH`.
pub const DEFAULT_TOOL: &str = "nmap";
pub const DEFAULT_XML_OUT: &str = "nmap_results.xml";
pub const DEFAULT_SUMMARY_OUT: &str = "nmap_summary.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Range handed to the scanner, unvalidated.
    pub target: ScanTarget,
    /// Program name or path of the scanner.
    pub tool: String,
    /// Where the scanner writes its XML report.
    ///
    /// Only the path is owned here, the file itself is written by the scanner.
    pub xml_out: PathBuf,
    pub summary_out: PathBuf,
    pub quiet: u8,
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: ScanTarget::from(DEFAULT_TARGET),
            tool: DEFAULT_TOOL.to_string(),
            xml_out: PathBuf::from(DEFAULT_XML_OUT),
            summary_out: PathBuf::from(DEFAULT_SUMMARY_OUT),
            quiet: 0,
            verbose: 0,
        }
    }
}

impl Config {
    /// The XML destination exactly as it appears on the scanner command line.
    pub fn xml_file(&self) -> String {
        self.xml_out.to_string_lossy().into_owned()
    }
}
