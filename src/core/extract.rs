//! Term extraction over call records.
//!
//! [`TermExtractor`] drives the matcher, resolver and detector over one
//! file's call records, and over a whole batch of per-file outcomes. A
//! failed file contributes its error to the run's error list and nothing
//! else; it can never corrupt or abort the rest of the batch.

use anyhow::Result;
use chrono::Utc;
use rayon::prelude::*;
use serde::Serialize;

use crate::config::Config;
use crate::core::call::{CallRecord, FileOutcome};
use crate::core::detect::ScriptDetector;
use crate::core::matcher::FunctionMatcher;
use crate::core::resolve::resolve_argument;
use crate::core::term::TermOccurrence;

/// Aggregate counts for one extraction run.
///
/// `total_terms` counts raw occurrences, before deduplication.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionSummary {
    pub total_files: usize,
    pub success_files: usize,
    pub error_files: usize,
    pub total_terms: usize,
}

/// A per-file failure reported by the parser collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    pub file: String,
    pub error: String,
}

/// Raw result of extracting over a batch of files.
#[derive(Debug, Default)]
pub struct ExtractionResult {
    /// Raw occurrences in file order, not yet deduplicated.
    pub occurrences: Vec<TermOccurrence>,
    pub errors: Vec<FileError>,
    pub summary: ExtractionSummary,
}

pub struct TermExtractor {
    matcher: FunctionMatcher,
    detector: ScriptDetector,
}

impl TermExtractor {
    pub fn new(matcher: FunctionMatcher, detector: ScriptDetector) -> Self {
        Self { matcher, detector }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            FunctionMatcher::new(&config.i18n_functions),
            ScriptDetector::new(&config.script_detection)?,
        ))
    }

    /// Extract all qualifying term occurrences from one file's calls.
    ///
    /// Arguments that fail resolution or script detection are skipped
    /// silently; they are expected, not errors.
    pub fn extract_from_file(&self, calls: &[CallRecord]) -> Vec<TermOccurrence> {
        let mut occurrences = Vec::new();

        for call in calls {
            if !self.matcher.is_target_function(&call.function_name) {
                continue;
            }
            for (argument_index, argument) in call.args.iter().enumerate() {
                let Some(text) = resolve_argument(argument) else {
                    continue;
                };
                if !self.detector.contains_target_script(&text) {
                    continue;
                }
                occurrences.push(TermOccurrence {
                    text,
                    source_file: call.source_file.clone(),
                    argument_index,
                    discovered_at: Utc::now(),
                });
            }
        }

        occurrences
    }

    /// Extract over a batch of per-file outcomes.
    ///
    /// Files are processed in parallel; results are collected back in
    /// input order so the downstream dedup pass sees a deterministic
    /// first-seen order.
    pub fn extract_from_files(&self, outcomes: &[FileOutcome]) -> ExtractionResult {
        let per_file: Vec<Result<Vec<TermOccurrence>, FileError>> = outcomes
            .par_iter()
            .map(|outcome| match outcome {
                FileOutcome::Success { calls, .. } => Ok(self.extract_from_file(calls)),
                FileOutcome::Failure { file, error } => Err(FileError {
                    file: file.clone(),
                    error: error.clone(),
                }),
            })
            .collect();

        let mut result = ExtractionResult {
            summary: ExtractionSummary {
                total_files: outcomes.len(),
                ..Default::default()
            },
            ..Default::default()
        };

        for file_result in per_file {
            match file_result {
                Ok(occurrences) => {
                    result.summary.success_files += 1;
                    result.summary.total_terms += occurrences.len();
                    result.occurrences.extend(occurrences);
                }
                Err(error) => {
                    result.summary.error_files += 1;
                    result.errors.push(error);
                }
            }
        }

        result
    }
}
