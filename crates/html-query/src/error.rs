//! Error types for selector queries and output configuration.

use thiserror::Error;

/// Errors surfaced while preparing a query, before any rendering starts.
///
/// Rendering itself is infallible: once the selectors compile and the format
/// bindings validate, every matched node produces a string. Parsing cannot
/// fail either, because the document engine applies standard HTML5 error
/// recovery to malformed input.
#[derive(Debug, Error)]
pub enum QueryError {
    /// A primary or format-binding selector failed to compile.
    #[error("invalid selector {selector:?}: {message}")]
    Selector {
        /// The selector text as given.
        selector: String,
        /// The engine's diagnostic.
        message: String,
    },

    /// A format template is missing its `{}` placeholder or has more than one.
    #[error("invalid format template {template:?}: {reason}")]
    Template {
        /// The template text as given.
        template: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The text-mode formatting argument is not a known style mode.
    #[error("unknown formatting mode {0:?} (expected plain, ansi, or md)")]
    StyleMode(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, QueryError>;
