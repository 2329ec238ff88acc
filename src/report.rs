//! Report formatting and printing utilities.
//!
//! This module is separate from the extraction logic to allow hanscan
//! to be used as a library without printing side effects.

use std::path::Path;

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{ExtractionSummary, FileError, Term};

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓
/// Failure mark for consistent output formatting
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Maximum terms shown in the verbose listing.
pub const MAX_LISTED_TERMS: usize = 10;

/// Print run statistics and per-file errors.
///
/// `final_terms` is the count after deduplication and translation
/// filtering; the summary counts raw occurrences.
pub fn print_summary(summary: &ExtractionSummary, final_terms: usize, errors: &[FileError]) {
    println!("\n{}", "Scan statistics:".bold().blue());
    println!(
        "   total files:  {}",
        summary.total_files.to_string().cyan()
    );
    println!(
        "   parsed:       {}",
        summary.success_files.to_string().green()
    );
    println!("   failed:       {}", summary.error_files.to_string().red());
    println!(
        "   raw terms:    {}",
        summary.total_terms.to_string().yellow()
    );
    println!("   final terms:  {}", final_terms.to_string().magenta());

    if !errors.is_empty() {
        println!("\n{} {}", FAILURE_MARK.red(), "Errors:".bold().red());
        for error in errors {
            println!("   {} {}: {}", "•".red(), error.file, error.error);
        }
    }
}

/// Print the first few extracted terms, aligned on display width so CJK
/// text lines up with the file column.
pub fn print_terms(terms: &[Term]) {
    if terms.is_empty() {
        return;
    }

    println!("\n{}", "Extracted terms:".bold().blue());

    let listed = &terms[..terms.len().min(MAX_LISTED_TERMS)];
    let max_width = listed
        .iter()
        .map(|term| UnicodeWidthStr::width(term.text()))
        .max()
        .unwrap_or(0);

    for (index, term) in listed.iter().enumerate() {
        let padding = max_width - UnicodeWidthStr::width(term.text());
        let location = match term {
            Term::Single(occurrence) => file_name(&occurrence.source_file),
            Term::Multi { locations, .. } => {
                format!(
                    "{} (+{} more)",
                    file_name(&locations[0].source_file),
                    locations.len() - 1
                )
            }
        };
        println!(
            "   {:>2}. \"{}\"{}  {}",
            index + 1,
            term.text().yellow(),
            " ".repeat(padding),
            location.dimmed()
        );
    }

    if terms.len() > MAX_LISTED_TERMS {
        println!(
            "   {} {} more terms",
            "...".dimmed(),
            terms.len() - MAX_LISTED_TERMS
        );
    }
}

/// Print a success message after writing the output file.
pub fn print_saved(output_file: &Path) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Results saved to: {}", output_file.display()).green()
    );
}

/// Print a success message when a scan finishes without writing output.
pub fn print_done(files_scanned: usize) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} {}",
            files_scanned,
            if files_scanned == 1 { "file" } else { "files" }
        )
        .green()
    );
}

/// Print a warning when no source files were found.
pub fn print_no_files() {
    println!(
        "{} No source files found in the configured directories",
        "warning:".bold().yellow()
    );
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}
