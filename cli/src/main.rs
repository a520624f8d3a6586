mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, scan};
use terminal::logging;

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();
    let cfg = commands.into_config();

    logging::init_logging(cfg.quiet, cfg.verbose)?;

    scan::scan(&cfg)
}
