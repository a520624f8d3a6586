pub mod scan;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use scanrun_common::config::{
    Config, DEFAULT_SUMMARY_OUT, DEFAULT_TARGET, DEFAULT_TOOL, DEFAULT_XML_OUT,
};
use scanrun_common::scan::target::ScanTarget;

#[derive(Parser, Debug)]
#[command(name = "scanrun")]
#[command(version)]
#[command(about = "Runs nmap against an address range and records where the report went.")]
pub struct CommandLine {
    /// Address range to scan, in CIDR notation
    #[arg(default_value = DEFAULT_TARGET)]
    pub target: ScanTarget,

    /// Scanner executable to run
    #[arg(long = "nmap", value_name = "PATH", default_value = DEFAULT_TOOL)]
    pub tool: String,

    /// Where the scanner writes its XML report
    #[arg(long, value_name = "PATH", default_value = DEFAULT_XML_OUT)]
    pub xml_out: PathBuf,

    /// Where the JSON summary is written
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SUMMARY_OUT)]
    pub summary_out: PathBuf,

    /// Reduce terminal output
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Show debug output (-vv for trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            target: self.target,
            tool: self.tool,
            xml_out: self.xml_out,
            summary_out: self.summary_out,
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}
