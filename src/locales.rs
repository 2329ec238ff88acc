//! Translation file loading.
//!
//! Translation maps are flat JSON objects from source text to its
//! translation (e.g. `locales/zh-CN.json`). A missing file is a normal
//! condition, reported distinctly from a read or parse failure so
//! callers can degrade the latter to a warning.

use std::{collections::HashMap, fs, path::Path};

use anyhow::{Context, Result};

use crate::core::TranslationMap;

/// Load a translation map from a JSON file.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn load_translation_map(path: &Path) -> Result<Option<TranslationMap>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation file: {}", path.display()))?;
    let entries: HashMap<String, String> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse translation file: {}", path.display()))?;

    Ok(Some(TranslationMap::new(entries)))
}
