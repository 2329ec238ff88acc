//! Core term-extraction engine.
//!
//! The engine is a pure, order-preserving pipeline over pre-parsed call
//! records; it has no file-system or process access of its own. Per run:
//!
//! 1. [`FunctionMatcher`] selects translation-function calls
//! 2. [`resolve_argument`] turns arguments into candidate text
//! 3. [`ScriptDetector`] admits text containing the target script
//! 4. [`TermExtractor`] assembles occurrences with per-file error isolation
//! 5. [`deduplicate`] merges occurrences into one term per distinct text
//! 6. [`filter_untranslated`] drops terms that already have a translation

pub mod call;
pub mod dedup;
pub mod detect;
pub mod extract;
pub mod matcher;
pub mod resolve;
pub mod term;
pub mod translation;

pub use call::{ArgumentNode, CallRecord, FileOutcome};
pub use dedup::deduplicate;
pub use detect::ScriptDetector;
pub use extract::{ExtractionResult, ExtractionSummary, FileError, TermExtractor};
pub use matcher::FunctionMatcher;
pub use resolve::resolve_argument;
pub use term::{Term, TermLocation, TermOccurrence};
pub use translation::{TranslationMap, filter_untranslated};
