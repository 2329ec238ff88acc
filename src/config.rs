use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Candidate config file locations, probed in order relative to the
/// working directory.
pub const CONFIG_FILE_CANDIDATES: &[&str] = &[
    "ci.yaml",
    "ci.yml",
    ".ci.yaml",
    ".ci.yml",
    "config/ci.yaml",
    "config/ci.yml",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default = "default_i18n_functions")]
    pub i18n_functions: Vec<I18nFunction>,
    #[serde(default)]
    pub script_detection: ScriptDetectionConfig,
    #[serde(default)]
    pub scan_config: ScanConfig,
    /// Language code to translation file path (e.g. `zh_cn: ./locales/zh-CN.json`).
    #[serde(default)]
    pub translated_files: BTreeMap<String, PathBuf>,
    #[serde(default)]
    pub output_config: OutputConfig,
}

/// A translation function identifier to look for at call sites.
///
/// Names are matched exactly: plain (`t`) or dotted selector (`i18n.T`).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nFunction {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl I18nFunction {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: Some(description.to_string()),
        }
    }
}

/// An inclusive Unicode code point range, configured as a `[low, high]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnicodeRange(pub u32, pub u32);

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScriptDetectionConfig {
    #[serde(default = "default_unicode_ranges")]
    pub unicode_ranges: Vec<UnicodeRange>,
    /// Minimum number of matching characters for a text to qualify.
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
}

fn default_unicode_ranges() -> Vec<UnicodeRange> {
    vec![
        UnicodeRange(0x4E00, 0x9FFF), // CJK Unified Ideographs
        UnicodeRange(0x3400, 0x4DBF), // Extension A
        UnicodeRange(0xF900, 0xFAFF), // Compatibility Ideographs
    ]
}

fn default_min_chars() -> usize {
    1
}

impl Default for ScriptDetectionConfig {
    fn default() -> Self {
        Self {
            unicode_ranges: default_unicode_ranges(),
            min_chars: default_min_chars(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    #[serde(default = "default_source_dirs")]
    pub source_dirs: Vec<PathBuf>,
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
    #[serde(default = "default_file_extensions")]
    pub file_extensions: Vec<String>,
    #[serde(default = "default_recursive")]
    pub recursive: bool,
}

fn default_source_dirs() -> Vec<PathBuf> {
    vec![PathBuf::from("./src")]
}

fn default_exclude_dirs() -> Vec<String> {
    vec!["./vendor".to_string()]
}

fn default_file_extensions() -> Vec<String> {
    vec![".go".to_string()]
}

fn default_recursive() -> bool {
    true
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_dirs: default_source_dirs(),
            exclude_dirs: default_exclude_dirs(),
            file_extensions: default_file_extensions(),
            recursive: default_recursive(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
    Yaml,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    #[serde(default = "default_include_location")]
    pub include_location: bool,
    #[serde(default = "default_deduplicate")]
    pub deduplicate: bool,
}

fn default_output_file() -> PathBuf {
    PathBuf::from("./extracted_terms.json")
}

fn default_format() -> OutputFormat {
    OutputFormat::Json
}

fn default_include_location() -> bool {
    true
}

fn default_deduplicate() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
            format: default_format(),
            include_location: default_include_location(),
            deduplicate: default_deduplicate(),
        }
    }
}

fn default_i18n_functions() -> Vec<I18nFunction> {
    vec![
        I18nFunction::new("t", "basic translation function"),
        I18nFunction::new("i18n.T", "i18n package translation function"),
        I18nFunction::new("Translate", "custom translation function"),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            i18n_functions: default_i18n_functions(),
            script_detection: ScriptDetectionConfig::default(),
            scan_config: ScanConfig::default(),
            translated_files: BTreeMap::new(),
            output_config: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Function names must be non-empty, Unicode ranges must be ordered
    /// pairs of valid scalar values, and `min_chars` must be at least 1.
    pub fn validate(&self) -> Result<()> {
        for (index, function) in self.i18n_functions.iter().enumerate() {
            if function.name.is_empty() {
                bail!("i18n_functions[{}] has an empty name", index);
            }
        }

        if self.script_detection.unicode_ranges.is_empty() {
            bail!("script_detection.unicode_ranges must not be empty");
        }
        for range in &self.script_detection.unicode_ranges {
            let UnicodeRange(low, high) = *range;
            if low > high {
                bail!(
                    "Invalid unicode range [{:#X}, {:#X}]: low end exceeds high end",
                    low,
                    high
                );
            }
            if char::from_u32(low).is_none() || char::from_u32(high).is_none() {
                bail!(
                    "Invalid unicode range [{:#X}, {:#X}]: not valid scalar values",
                    low,
                    high
                );
            }
        }
        if self.script_detection.min_chars == 0 {
            bail!("script_detection.min_chars must be at least 1");
        }

        Ok(())
    }

    /// Resolve relative paths against the directory containing the config
    /// file, so that running from a subdirectory behaves the same.
    pub fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: &PathBuf| -> PathBuf {
            if path.is_absolute() {
                path.clone()
            } else {
                config_dir.join(path)
            }
        };

        for path in self.translated_files.values_mut() {
            *path = resolve(path);
        }
        for dir in &mut self.scan_config.source_dirs {
            *dir = resolve(dir);
        }
        self.output_config.output_file = resolve(&self.output_config.output_file);
    }

    /// Translation file path for the given language code, if configured.
    pub fn translated_file(&self, language: &str) -> Option<&Path> {
        self.translated_files.get(language).map(PathBuf::as_path)
    }
}

pub fn default_config_yaml() -> Result<String> {
    let mut config = Config::default();
    config
        .translated_files
        .insert("zh_cn".to_string(), PathBuf::from("./locales/zh-CN.json"));
    serde_yaml::to_string(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_CANDIDATES
        .iter()
        .map(|candidate| start_dir.join(candidate))
        .find(|path| path.exists())
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// The config file the values came from; its directory anchors
    /// relative paths.
    pub path: PathBuf,
}

impl ConfigLoadResult {
    pub fn config_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new("."))
    }
}

/// Load configuration from an explicit path or by probing the candidate
/// locations under `start_dir`.
///
/// An explicitly passed path must exist; otherwise a missing config file
/// is an error (run `init` to create one). Missing fields inside the file
/// fall back to their defaults.
pub fn load_config(explicit: Option<&Path>, start_dir: &Path) -> Result<ConfigLoadResult> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => find_config_file(start_dir)
            .with_context(|| format!("No ci.yaml found under {}", start_dir.display()))?,
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let mut config: Config = serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;

    let config_dir = path.parent().unwrap_or(Path::new("."));
    config.resolve_paths(config_dir);

    Ok(ConfigLoadResult { config, path })
}
