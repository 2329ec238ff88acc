use anyhow::Result;

use super::helper::run_pipeline;
use crate::cli::args::ScanCommand;
use crate::cli::exit_status::ExitStatus;
use crate::report;
use crate::writer::write_output;

pub fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let args = cmd.args;
    let mut outcome = run_pipeline(&args.common, !args.include_translated)?;

    if outcome.files_scanned == 0 {
        report::print_no_files();
        return Ok(ExitStatus::Success);
    }

    // CLI flags override the config file's output settings
    if let Some(output) = args.output {
        outcome.config.output_config.output_file = output;
    }
    if let Some(format) = args.format {
        outcome.config.output_config.format = format;
    }

    if !args.no_output {
        let output = &outcome.config.output_config;
        write_output(
            &output.output_file,
            &outcome.terms,
            &outcome.summary,
            output.format,
            output.include_location,
        )?;
        report::print_saved(&output.output_file);
    } else {
        report::print_done(outcome.files_scanned);
    }

    if args.common.verbose {
        report::print_terms(&outcome.terms);
    }
    report::print_summary(&outcome.summary, outcome.terms.len(), &outcome.errors);

    Ok(ExitStatus::Success)
}
