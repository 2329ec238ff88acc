//! Target-script detection.
//!
//! Decides whether a piece of text belongs in the extraction output: it
//! must contain at least `min_chars` characters from the configured
//! Unicode ranges. The character class is compiled once per run and
//! shared across files.

use anyhow::{Context, Result, bail};
use regex::Regex;

use crate::config::ScriptDetectionConfig;

pub struct ScriptDetector {
    class: Regex,
    min_chars: usize,
}

impl ScriptDetector {
    /// Compile the detector from validated config.
    pub fn new(config: &ScriptDetectionConfig) -> Result<Self> {
        if config.unicode_ranges.is_empty() {
            bail!("script_detection.unicode_ranges must not be empty");
        }

        let mut class = String::from("[");
        for range in &config.unicode_ranges {
            class.push_str(&format!(r"\u{{{:X}}}-\u{{{:X}}}", range.0, range.1));
        }
        class.push(']');

        let class = Regex::new(&class)
            .with_context(|| format!("Failed to compile script character class: {}", class))?;

        Ok(Self {
            class,
            min_chars: config.min_chars,
        })
    }

    /// True if `text` contains at least `min_chars` characters from the
    /// configured ranges. Empty input never qualifies.
    pub fn contains_target_script(&self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.class.find_iter(text).take(self.min_chars).count() >= self.min_chars
    }
}
