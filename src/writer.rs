//! Output serialization for extracted terms.
//!
//! The extraction engine never formats anything itself; this module turns
//! the final terms plus run summary into the configured output format and
//! writes them to disk. The document shape is stable across formats:
//! `{ metadata: { extractedAt, totalTerms, summary }, terms: [...] }`.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::core::{ExtractionSummary, Term};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Metadata<'a> {
    extracted_at: DateTime<Utc>,
    /// Count of final terms, after deduplication and filtering.
    total_terms: usize,
    summary: &'a ExtractionSummary,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum TermView<'a> {
    Full(&'a Term),
    #[serde(rename_all = "camelCase")]
    Minimal {
        text: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        discovered_at: Option<DateTime<Utc>>,
    },
}

#[derive(Debug, Serialize)]
struct OutputDocument<'a> {
    metadata: Metadata<'a>,
    terms: Vec<TermView<'a>>,
}

impl<'a> OutputDocument<'a> {
    fn new(
        terms: &'a [Term],
        summary: &'a ExtractionSummary,
        include_location: bool,
        extracted_at: DateTime<Utc>,
    ) -> Self {
        let views: Vec<TermView<'a>> = terms
            .iter()
            .map(|term| {
                if include_location {
                    TermView::Full(term)
                } else {
                    TermView::Minimal {
                        text: term.text(),
                        discovered_at: match term {
                            Term::Single(occurrence) => Some(occurrence.discovered_at),
                            Term::Multi { .. } => None,
                        },
                    }
                }
            })
            .collect();

        Self {
            metadata: Metadata {
                extracted_at,
                total_terms: views.len(),
                summary,
            },
            terms: views,
        }
    }
}

/// Render the output document in the requested format.
pub fn render(
    terms: &[Term],
    summary: &ExtractionSummary,
    format: OutputFormat,
    include_location: bool,
    extracted_at: DateTime<Utc>,
) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let document = OutputDocument::new(terms, summary, include_location, extracted_at);
            let json =
                serde_json::to_string_pretty(&document).context("Failed to serialize JSON")?;
            Ok(format!("{}\n", json))
        }
        OutputFormat::Yaml => {
            let document = OutputDocument::new(terms, summary, include_location, extracted_at);
            serde_yaml::to_string(&document).context("Failed to serialize YAML")
        }
        OutputFormat::Csv => Ok(render_csv(terms)),
    }
}

/// Write the rendered document to `path`, creating parent directories.
pub fn write_output(
    path: &Path,
    terms: &[Term],
    summary: &ExtractionSummary,
    format: OutputFormat,
    include_location: bool,
) -> Result<()> {
    let content = render(terms, summary, format, include_location, Utc::now())?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write: {}", path.display()))?;

    Ok(())
}

/// CSV emits one row per discovery location; only single-location terms
/// carry a timestamp.
fn render_csv(terms: &[Term]) -> String {
    let mut rows = vec!["text,file,argumentIndex,discoveredAt".to_string()];

    for term in terms {
        match term {
            Term::Single(occurrence) => rows.push(format!(
                "{},{},{},{}",
                csv_quote(&occurrence.text),
                csv_quote(&occurrence.source_file),
                occurrence.argument_index,
                occurrence
                    .discovered_at
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
            )),
            Term::Multi { text, locations } => {
                for location in locations {
                    rows.push(format!(
                        "{},{},{},",
                        csv_quote(text),
                        csv_quote(&location.source_file),
                        location.argument_index,
                    ));
                }
            }
        }
    }

    let mut output = rows.join("\n");
    output.push('\n');
    output
}

fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tempfile::tempdir;

    use super::*;
    use crate::core::{TermLocation, TermOccurrence};

    fn fixed_time() -> DateTime<Utc> {
        "2024-05-01T00:00:00Z".parse().unwrap()
    }

    fn single(text: &str, file: &str, index: usize) -> Term {
        Term::Single(TermOccurrence {
            text: text.to_string(),
            source_file: file.to_string(),
            argument_index: index,
            discovered_at: fixed_time(),
        })
    }

    fn multi(text: &str, files: &[&str]) -> Term {
        Term::Multi {
            text: text.to_string(),
            locations: files
                .iter()
                .map(|file| TermLocation {
                    source_file: file.to_string(),
                    argument_index: 0,
                })
                .collect(),
        }
    }

    fn summary() -> ExtractionSummary {
        ExtractionSummary {
            total_files: 2,
            success_files: 2,
            error_files: 0,
            total_terms: 3,
        }
    }

    #[test]
    fn test_json_document_shape() {
        let terms = vec![single("你好", "a.go", 0), multi("世界", &["a.go", "b.go"])];
        let rendered = render(
            &terms,
            &summary(),
            OutputFormat::Json,
            true,
            fixed_time(),
        )
        .unwrap();

        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["metadata"]["totalTerms"], 2);
        assert_eq!(value["metadata"]["summary"]["totalFiles"], 2);
        assert_eq!(value["metadata"]["extractedAt"], "2024-05-01T00:00:00Z");
        assert_eq!(value["terms"][0]["text"], "你好");
        assert_eq!(value["terms"][0]["file"], "a.go");
        assert_eq!(value["terms"][1]["locations"][1]["file"], "b.go");
    }

    #[test]
    fn test_json_without_location() {
        let terms = vec![single("你好", "a.go", 0), multi("世界", &["a.go", "b.go"])];
        let rendered = render(
            &terms,
            &summary(),
            OutputFormat::Json,
            false,
            fixed_time(),
        )
        .unwrap();

        let value: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["terms"][0]["text"], "你好");
        assert!(value["terms"][0].get("file").is_none());
        assert!(value["terms"][0].get("discoveredAt").is_some());
        // Promoted terms have no single timestamp to report.
        assert!(value["terms"][1].get("discoveredAt").is_none());
    }

    #[test]
    fn test_yaml_round_trips() {
        let terms = vec![single("你好", "a.go", 0)];
        let rendered = render(
            &terms,
            &summary(),
            OutputFormat::Yaml,
            true,
            fixed_time(),
        )
        .unwrap();

        let value: serde_yaml::Value = serde_yaml::from_str(&rendered).unwrap();
        assert_eq!(value["terms"][0]["text"].as_str(), Some("你好"));
        assert_eq!(
            value["metadata"]["summary"]["successFiles"].as_u64(),
            Some(2)
        );
    }

    #[test]
    fn test_csv_layout() {
        let terms = vec![
            single("你好", "a.go", 1),
            multi("世界", &["a.go", "b.go"]),
        ];
        let rendered = render(
            &terms,
            &summary(),
            OutputFormat::Csv,
            true,
            fixed_time(),
        )
        .unwrap();

        insta::assert_snapshot!(rendered, @r###"
        text,file,argumentIndex,discoveredAt
        "你好","a.go",1,2024-05-01T00:00:00Z
        "世界","a.go",0,
        "世界","b.go",0,
        "###);
    }

    #[test]
    fn test_csv_escapes_embedded_quotes() {
        let terms = vec![single("他说\"你好\"", "a.go", 0)];
        let rendered = render(
            &terms,
            &summary(),
            OutputFormat::Csv,
            true,
            fixed_time(),
        )
        .unwrap();

        assert!(rendered.contains("\"他说\"\"你好\"\"\""));
    }

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("terms.json");
        let terms = vec![single("你好", "a.go", 0)];

        write_output(&path, &terms, &summary(), OutputFormat::Json, true).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let value: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["terms"][0]["text"], "你好");
    }
}
