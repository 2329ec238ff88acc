//! Argument-to-text resolution.
//!
//! Turns an [`ArgumentNode`] into the text it contributes, if any.
//! Only literal values and string concatenation are resolved; everything
//! else is a silent miss, not an error.

use crate::core::call::ArgumentNode;

/// Resolve an argument to its textual value.
///
/// - `Literal`: the raw token with one layer of matching surrounding
///   quotes (`"` or `'`) stripped; an empty token resolves to nothing.
/// - `Binary`: both sides resolved and concatenated. A concatenation in
///   which only one operand is literal yields that operand's text alone,
///   so partially-dynamic calls like `t("用户" + name)` still surface
///   their literal portion.
/// - `Other`: nothing.
pub fn resolve_argument(node: &ArgumentNode) -> Option<String> {
    match node {
        ArgumentNode::Literal { raw } => {
            if raw.is_empty() {
                None
            } else {
                Some(strip_quotes(raw).to_string())
            }
        }
        ArgumentNode::Binary { left, right } => {
            match (resolve_argument(left), resolve_argument(right)) {
                (Some(left), Some(right)) => Some(format!("{}{}", left, right)),
                (left, right) => left.or(right),
            }
        }
        ArgumentNode::Other => None,
    }
}

/// Strip exactly one layer of matching surrounding quotes.
///
/// Unquoted or mismatched-quote tokens are returned unchanged.
fn strip_quotes(raw: &str) -> &str {
    if raw.len() < 2 {
        return raw;
    }
    let bytes = raw.as_bytes();
    let matching = (bytes[0] == b'"' && bytes[raw.len() - 1] == b'"')
        || (bytes[0] == b'\'' && bytes[raw.len() - 1] == b'\'');
    if matching {
        &raw[1..raw.len() - 1]
    } else {
        raw
    }
}
