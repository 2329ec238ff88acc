//! Go source parsing via the external Go toolchain.
//!
//! Rather than reimplementing a Go parser, a small stdlib-only AST-dump
//! program is written to a scratch directory and executed with `go run`
//! over the whole batch of files. The program emits one JSON object per
//! requested file: either its call expressions as structured argument
//! trees, or the parse error that file produced. A file that fails to
//! parse is reported as a [`FileOutcome::Failure`] and never affects the
//! rest of the batch.

use std::{
    env, fs,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use serde::Deserialize;

use crate::core::{ArgumentNode, CallRecord, FileOutcome};

/// The AST-dump program executed with `go run`.
///
/// Callee names are resolved for plain identifiers (`t`) and single-level
/// selectors (`i18n.T`); calls through anything else are skipped, matching
/// what the function matcher can express. Literal argument values carry
/// their raw token, quotes included.
const AST_DUMP_PROGRAM: &str = r#"package main

import (
	"encoding/json"
	"fmt"
	"go/ast"
	"go/parser"
	"go/token"
	"os"
)

type ArgNode struct {
	Kind  string   `json:"kind"`
	Value string   `json:"value,omitempty"`
	Left  *ArgNode `json:"left,omitempty"`
	Right *ArgNode `json:"right,omitempty"`
}

type CallExpr struct {
	Function string     `json:"function"`
	Args     []*ArgNode `json:"args"`
}

type FileResult struct {
	File  string     `json:"file"`
	Calls []CallExpr `json:"calls,omitempty"`
	Error string     `json:"error,omitempty"`
}

func encodeArg(expr ast.Expr) *ArgNode {
	switch node := expr.(type) {
	case *ast.BasicLit:
		return &ArgNode{Kind: "literal", Value: node.Value}
	case *ast.BinaryExpr:
		return &ArgNode{Kind: "binary", Left: encodeArg(node.X), Right: encodeArg(node.Y)}
	default:
		return &ArgNode{Kind: "other"}
	}
}

func main() {
	results := make([]FileResult, 0, len(os.Args)-1)
	for _, path := range os.Args[1:] {
		fset := token.NewFileSet()
		parsed, err := parser.ParseFile(fset, path, nil, 0)
		if err != nil {
			results = append(results, FileResult{File: path, Error: err.Error()})
			continue
		}
		result := FileResult{File: path, Calls: make([]CallExpr, 0)}
		ast.Inspect(parsed, func(n ast.Node) bool {
			call, ok := n.(*ast.CallExpr)
			if !ok {
				return true
			}
			name := ""
			switch fun := call.Fun.(type) {
			case *ast.Ident:
				name = fun.Name
			case *ast.SelectorExpr:
				if ident, ok := fun.X.(*ast.Ident); ok {
					name = ident.Name + "." + fun.Sel.Name
				}
			}
			if name == "" {
				return true
			}
			args := make([]*ArgNode, 0, len(call.Args))
			for _, arg := range call.Args {
				args = append(args, encodeArg(arg))
			}
			result.Calls = append(result.Calls, CallExpr{Function: name, Args: args})
			return true
		})
		results = append(results, result)
	}
	output, err := json.Marshal(results)
	if err != nil {
		fmt.Fprintln(os.Stderr, err)
		os.Exit(1)
	}
	fmt.Print(string(output))
}
"#;

/// Wire format of one file's result from the AST-dump program.
#[derive(Debug, Deserialize)]
struct RawFileResult {
    file: String,
    #[serde(default)]
    calls: Vec<RawCall>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawCall {
    function: String,
    #[serde(default)]
    args: Vec<ArgumentNode>,
}

impl RawFileResult {
    fn into_outcome(self) -> FileOutcome {
        match self.error {
            Some(error) => FileOutcome::Failure {
                file: self.file,
                error,
            },
            None => {
                let calls = self
                    .calls
                    .into_iter()
                    .map(|call| CallRecord {
                        function_name: call.function,
                        args: call.args,
                        source_file: self.file.clone(),
                    })
                    .collect();
                FileOutcome::Success {
                    file: self.file,
                    calls,
                }
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct GoAstParser;

impl GoAstParser {
    pub fn new() -> Self {
        Self
    }

    /// True if the `go` toolchain is on PATH.
    pub fn check_go_available() -> bool {
        Command::new("go")
            .arg("version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    /// Parse a batch of Go files into per-file outcomes, in request order.
    pub fn parse_files(&self, files: &[PathBuf]) -> Result<Vec<FileOutcome>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let scratch = scratch_dir();
        fs::create_dir_all(&scratch).with_context(|| {
            format!("Failed to create scratch directory: {}", scratch.display())
        })?;
        let program = scratch.join("ast_dump.go");

        let result = fs::write(&program, AST_DUMP_PROGRAM)
            .with_context(|| format!("Failed to write AST dump program: {}", program.display()))
            .and_then(|_| run_dump(&program, files));

        cleanup(&scratch);
        result
    }
}

fn scratch_dir() -> PathBuf {
    env::temp_dir().join(format!("hanscan-astdump-{}", std::process::id()))
}

fn run_dump(program: &Path, files: &[PathBuf]) -> Result<Vec<FileOutcome>> {
    let output = Command::new("go")
        .arg("run")
        .arg(program)
        .args(files)
        .output()
        .context("Failed to run the Go toolchain (is `go` on PATH?)")?;

    if !output.status.success() {
        bail!(
            "Go AST dump failed: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    let raw: Vec<RawFileResult> =
        serde_json::from_slice(&output.stdout).context("Failed to parse AST dump output")?;
    Ok(raw.into_iter().map(RawFileResult::into_outcome).collect())
}

fn cleanup(scratch: &Path) {
    if let Err(err) = fs::remove_dir_all(scratch) {
        eprintln!(
            "{} Failed to clean up scratch directory {}: {}",
            "warning:".bold().yellow(),
            scratch.display(),
            err
        );
    }
}
