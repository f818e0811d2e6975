//! Error types for table rendering.

/// Errors that can occur while rendering a posts table.
///
/// Option resolution and row projection are total and never fail; the only
/// failure source is the template engine, which indicates a broken template
/// registration or context rather than bad shortcode input.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Template compilation or rendering failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Serializing a client attribute value failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
