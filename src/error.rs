//! Error type for the derivation pipeline.

use thiserror::Error;

/// Why a document could not be turned into JSON and a schema.
///
/// Front ends collapse every variant into the same "Invalid YAML"
/// placeholder; the variants only matter for logs.
#[derive(Debug, Error)]
pub enum DeriveError {
    /// Malformed YAML, multiple documents, duplicate keys, or nesting too deep.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A sequence or mapping was used as a mapping key.
    #[error("unsupported mapping key: {0}")]
    UnsupportedKey(String),

    /// Pretty-printing the JSON or schema failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
