//! Shared scan pipeline used by the `scan` and `stats` commands.

use std::env;

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::cli::args::CommonArgs;
use crate::config::{Config, ConfigLoadResult, load_config};
use crate::core::{
    ExtractionSummary, FileError, Term, TermExtractor, deduplicate, filter_untranslated,
};
use crate::locales::load_translation_map;
use crate::parser::GoAstParser;
use crate::scanner::scan_files;

/// Language key of the translation map used to filter already-translated
/// terms.
pub const SOURCE_LANGUAGE: &str = "zh_cn";

pub struct ScanOutcome {
    pub config: Config,
    /// Final terms, after deduplication and (optionally) translation filtering.
    pub terms: Vec<Term>,
    pub errors: Vec<FileError>,
    pub summary: ExtractionSummary,
    pub files_scanned: usize,
}

/// Run the full extraction pipeline: discover files, parse them through
/// the Go toolchain, extract, deduplicate and filter.
pub fn run_pipeline(common: &CommonArgs, exclude_translated: bool) -> Result<ScanOutcome> {
    let cwd = env::current_dir().context("Failed to determine working directory")?;
    let loaded = load_config(common.config.as_deref(), &cwd)?;

    if !GoAstParser::check_go_available() {
        bail!("Go toolchain not found on PATH; install Go to parse source files");
    }

    let files = scan_files(&loaded.config.scan_config, loaded.config_dir(), common.verbose);
    if common.verbose {
        println!("Found {} source files", files.len());
    }

    let outcomes = GoAstParser::new().parse_files(&files)?;
    let extractor = TermExtractor::from_config(&loaded.config)?;
    let extraction = extractor.extract_from_files(&outcomes);

    let terms = deduplicate(
        extraction.occurrences,
        loaded.config.output_config.deduplicate,
    );
    let terms = if exclude_translated {
        apply_translation_filter(terms, &loaded)
    } else {
        terms
    };

    Ok(ScanOutcome {
        config: loaded.config,
        terms,
        errors: extraction.errors,
        summary: extraction.summary,
        files_scanned: files.len(),
    })
}

/// Drop terms that already have a translation.
///
/// A missing translation file means nothing is filtered; a file that
/// cannot be read or parsed degrades to a pass-through with a warning
/// rather than aborting the scan.
fn apply_translation_filter(terms: Vec<Term>, loaded: &ConfigLoadResult) -> Vec<Term> {
    let Some(path) = loaded.config.translated_file(SOURCE_LANGUAGE) else {
        return terms;
    };

    match load_translation_map(path) {
        Ok(map) => filter_untranslated(terms, map.as_ref()),
        Err(err) => {
            eprintln!(
                "{} Skipping translation filter: {:#}",
                "warning:".bold().yellow(),
                err
            );
            terms
        }
    }
}
