//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Extract untranslated terms from Go sources (default command)
//! - `validate`: Check the Go toolchain and config file
//! - `init`: Create a default `ci.yaml` (or a sample project)
//! - `stats`: Show per-file and term-length statistics

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Config file path (default: probe ci.yaml and its variants)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Default, Parser)]
pub struct ScanArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Output file path (overrides config file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (overrides config file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Keep terms that already have a translation
    #[arg(long)]
    pub include_translated: bool,

    /// Skip writing the output file, only show statistics
    #[arg(long)]
    pub no_output: bool,
}

#[derive(Debug, Default, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Parser)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ValidateCommand {
    #[command(flatten)]
    pub args: ValidateArgs,
}

#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Overwrite files that already exist
    #[arg(short, long)]
    pub force: bool,

    /// Create a sample project instead of just a config file
    #[arg(long)]
    pub example: bool,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    #[command(flatten)]
    pub args: InitArgs,
}

#[derive(Debug, Parser)]
pub struct StatsArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    #[command(flatten)]
    pub args: StatsArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan Go sources and extract untranslated terms
    Scan(ScanCommand),
    /// Validate the Go toolchain and configuration file
    Validate(ValidateCommand),
    /// Create a default ci.yaml configuration file
    Init(InitCommand),
    /// Show per-file and term-length statistics
    Stats(StatsCommand),
}
