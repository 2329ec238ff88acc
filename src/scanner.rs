//! Source file discovery.
//!
//! Walks the configured source directories and collects files with a
//! configured extension, honoring exclude patterns. The result is
//! deduplicated and sorted so repeated runs see the same file order;
//! downstream deduplication depends on a deterministic first-seen order.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::ScanConfig;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal directory paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

pub fn scan_files(scan: &ScanConfig, base_dir: &Path, verbose: bool) -> Vec<PathBuf> {
    // Separate exclude patterns into literal paths and glob patterns
    let mut literal_excludes: Vec<PathBuf> = Vec::new();
    let mut glob_excludes: Vec<Pattern> = Vec::new();

    for exclude in &scan.exclude_dirs {
        if is_glob_pattern(exclude) {
            match Pattern::new(exclude) {
                Ok(pattern) => glob_excludes.push(pattern),
                Err(err) => {
                    if verbose {
                        eprintln!(
                            "{} Invalid exclude pattern '{}': {}",
                            "warning:".bold().yellow(),
                            exclude,
                            err
                        );
                    }
                }
            }
        } else {
            // Literal path mode: anchor to the project root for prefix matching
            literal_excludes.push(base_dir.join(exclude));
        }
    }

    let mut files: HashSet<PathBuf> = HashSet::new();

    for source_dir in &scan.source_dirs {
        if !source_dir.exists() {
            eprintln!(
                "{} Source directory does not exist: {}",
                "warning:".bold().yellow(),
                source_dir.display()
            );
            continue;
        }

        let mut walker = WalkDir::new(source_dir);
        if !scan.recursive {
            walker = walker.max_depth(1);
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    if verbose {
                        eprintln!(
                            "{} Cannot access path: {}",
                            "warning:".bold().yellow(),
                            err
                        );
                    }
                    continue;
                }
            };
            let path = entry.path();

            if literal_excludes
                .iter()
                .any(|exclude| path.starts_with(exclude))
            {
                continue;
            }
            let path_str = path.to_string_lossy();
            if glob_excludes.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if path.is_file() && has_configured_extension(&path_str, &scan.file_extensions) {
                files.insert(path.to_path_buf());
            }
        }
    }

    let mut files: Vec<PathBuf> = files.into_iter().collect();
    files.sort();
    files
}

fn has_configured_extension(path: &str, extensions: &[String]) -> bool {
    extensions.iter().any(|ext| path.ends_with(ext.as_str()))
}
