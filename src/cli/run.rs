//! Command dispatch.
//!
//! Running without a subcommand is equivalent to `hanscan scan` with
//! default options.

use anyhow::Result;

use super::args::{Arguments, Command, ScanCommand};
use super::commands::{init::init, scan::scan, stats::stats, validate::validate};
use super::exit_status::ExitStatus;

pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd),
        Some(Command::Validate(cmd)) => validate(cmd),
        Some(Command::Init(cmd)) => init(cmd),
        Some(Command::Stats(cmd)) => stats(cmd),
        None => scan(ScanCommand::default()),
    }
}
