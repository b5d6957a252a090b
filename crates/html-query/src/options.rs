//! Invocation options: style modes and format bindings.

use std::str::FromStr;

use crate::error::QueryError;

/// Inline formatting scheme applied while rendering text.
///
/// Selected once per invocation and immutable during rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StyleMode {
    /// No inline markers.
    #[default]
    Plain,
    /// Terminal escape sequences (bold, underline, inverse).
    Ansi,
    /// Lightweight markup (`**`, `_`, backticks).
    Markdown,
}

impl FromStr for StyleMode {
    type Err = QueryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "plain" => Ok(Self::Plain),
            "ansi" => Ok(Self::Ansi),
            "md" | "markdown" => Ok(Self::Markdown),
            other => Err(QueryError::StyleMode(other.to_string())),
        }
    }
}

/// A user-registered (selector, template) pair.
///
/// Every node matched by `selector` has its rendered text substituted into
/// `template` at the `{}` placeholder. Bindings are evaluated in registration
/// order; the first one whose match set contains the node wins, and nodes
/// matched by no binding pass through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatBinding {
    /// CSS selector naming the nodes this binding applies to.
    pub selector: String,
    /// Template with exactly one `{}` placeholder.
    pub template: String,
}

impl FormatBinding {
    /// Creates a binding from selector and template text.
    pub fn new(selector: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            template: template.into(),
        }
    }
}
