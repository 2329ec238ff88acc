use std::collections::HashMap;

use anyhow::Result;
use colored::Colorize;

use super::helper::run_pipeline;
use crate::cli::args::StatsCommand;
use crate::cli::exit_status::ExitStatus;
use crate::core::Term;

const MAX_LISTED_FILES: usize = 10;

/// Summarize extraction results without writing an output file.
pub fn stats(cmd: StatsCommand) -> Result<ExitStatus> {
    let outcome = run_pipeline(&cmd.args.common, true)?;

    let per_file = count_per_file(&outcome.terms);
    if !per_file.is_empty() {
        println!("\n{}", "Terms per file:".bold().blue());
        for (file, count) in per_file.iter().take(MAX_LISTED_FILES) {
            println!("   {}: {}", file.cyan(), count.to_string().yellow());
        }
    }

    if let Some(lengths) = length_stats(&outcome.terms) {
        println!("\n{}", "Term length:".bold().blue());
        println!("   average: {} chars", format!("{:.1}", lengths.average).cyan());
        println!("   longest: {} chars", lengths.max.to_string().cyan());
        println!("   shortest: {} chars", lengths.min.to_string().cyan());
    }

    if outcome.terms.is_empty() {
        println!("{}", "No untranslated terms found".green());
    }

    Ok(ExitStatus::Success)
}

/// Occurrence counts keyed by file name, highest first.
fn count_per_file(terms: &[Term]) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for term in terms {
        for location in term.locations() {
            *counts.entry(location.source_file).or_default() += 1;
        }
    }

    let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

struct LengthStats {
    average: f64,
    max: usize,
    min: usize,
}

fn length_stats(terms: &[Term]) -> Option<LengthStats> {
    if terms.is_empty() {
        return None;
    }

    let lengths: Vec<usize> = terms
        .iter()
        .map(|term| term.text().chars().count())
        .collect();
    let total: usize = lengths.iter().sum();

    Some(LengthStats {
        average: total as f64 / lengths.len() as f64,
        max: *lengths.iter().max().unwrap(),
        min: *lengths.iter().min().unwrap(),
    })
}
