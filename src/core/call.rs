//! Input data model for the extraction engine.
//!
//! These types are the contract with the parser collaborator: the engine
//! never sees source text, only pre-parsed call-expression records. A
//! `FileOutcome` carries either the call records for one file or the error
//! that prevented parsing it; a failed file never aborts the batch.

use serde::Deserialize;

/// One argument of a call expression, as reported by the parser.
///
/// Unsupported argument shapes are represented explicitly as `Other` so
/// that skipping them is a checked match arm rather than an implicit null.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ArgumentNode {
    /// A literal token, quotes included (e.g. `"你好"`).
    Literal {
        #[serde(rename = "value", default)]
        raw: String,
    },
    /// A binary expression, in practice string concatenation with `+`.
    Binary {
        left: Box<ArgumentNode>,
        right: Box<ArgumentNode>,
    },
    /// Anything the parser does not model (identifiers, calls, selectors).
    Other,
}

impl ArgumentNode {
    pub fn literal(raw: &str) -> Self {
        ArgumentNode::Literal {
            raw: raw.to_string(),
        }
    }

    pub fn binary(left: ArgumentNode, right: ArgumentNode) -> Self {
        ArgumentNode::Binary {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// A single call expression found in a source file.
///
/// `args` preserves call-site left-to-right order; the `argument_index`
/// carried by extracted terms refers to this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    /// Resolved callee name: plain (`t`) or single-level selector (`i18n.T`).
    pub function_name: String,
    pub args: Vec<ArgumentNode>,
    /// Path of the file this call was found in.
    pub source_file: String,
}

/// Per-file result handed over by the parser collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Success {
        file: String,
        calls: Vec<CallRecord>,
    },
    Failure {
        file: String,
        error: String,
    },
}

impl FileOutcome {
    pub fn file(&self) -> &str {
        match self {
            FileOutcome::Success { file, .. } | FileOutcome::Failure { file, .. } => file,
        }
    }
}
