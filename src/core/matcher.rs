//! Translation-function call matching.

use std::collections::HashSet;

use crate::config::I18nFunction;

/// Matches call-site function names against the configured translation
/// function identifiers.
///
/// Matching is exact, case-sensitive and whole-string: `i18n.T` matches
/// only the configured entry `i18n.T`, never `T` or `X.i18n.T`.
pub struct FunctionMatcher {
    names: HashSet<String>,
}

impl FunctionMatcher {
    pub fn new(functions: &[I18nFunction]) -> Self {
        Self {
            names: functions.iter().map(|f| f.name.clone()).collect(),
        }
    }

    pub fn is_target_function(&self, name: &str) -> bool {
        !name.is_empty() && self.names.contains(name)
    }
}
