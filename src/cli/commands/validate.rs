use std::env;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::args::ValidateCommand;
use crate::cli::exit_status::ExitStatus;
use crate::config::load_config;
use crate::parser::GoAstParser;
use crate::report::{FAILURE_MARK, SUCCESS_MARK};

/// Check that the environment and configuration are ready for scanning.
pub fn validate(cmd: ValidateCommand) -> Result<ExitStatus> {
    let args = cmd.args;
    println!("{}", "Validating environment and configuration...".blue());

    let go_available = GoAstParser::check_go_available();
    println!(
        "Go toolchain: {}",
        if go_available {
            format!("{} available", SUCCESS_MARK).green()
        } else {
            format!("{} not found", FAILURE_MARK).red()
        }
    );

    let cwd = env::current_dir().context("Failed to determine working directory")?;
    let config_valid = match load_config(args.common.config.as_deref(), &cwd) {
        Ok(loaded) => {
            println!("Config file:  {}", format!("{} valid", SUCCESS_MARK).green());
            println!(
                "  source dirs:       {}",
                loaded.config.scan_config.source_dirs.len().to_string().cyan()
            );
            println!(
                "  translation files: {}",
                loaded.config.translated_files.len().to_string().cyan()
            );
            true
        }
        Err(err) => {
            println!("Config file:  {}", format!("{} invalid", FAILURE_MARK).red());
            if args.common.verbose {
                eprintln!("  {:#}", err);
            }
            false
        }
    };

    let ready = go_available && config_valid;
    println!(
        "\nStatus: {}",
        if ready {
            format!("{} ready", SUCCESS_MARK).green()
        } else {
            format!("{} needs attention", FAILURE_MARK).red()
        }
    );

    Ok(if ready {
        ExitStatus::Success
    } else {
        ExitStatus::Failure
    })
}
