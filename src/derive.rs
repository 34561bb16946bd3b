//! The derivation pipeline: YAML text in, JSON and JSON Schema text out.

use serde_json::Value;

use crate::convert::parse_yaml;
use crate::error::DeriveError;
use crate::infer::infer_schema;

/// Placeholder shown in both outputs when the document cannot be derived.
pub const INVALID_YAML: &str = "Invalid YAML";

/// The pair of pretty-printed outputs for one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derived {
    pub json: String,
    pub schema: String,
}

impl Derived {
    /// The placeholder pair used for any failure.
    pub fn invalid() -> Self {
        Self {
            json: INVALID_YAML.to_string(),
            schema: INVALID_YAML.to_string(),
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.json == INVALID_YAML && self.schema == INVALID_YAML
    }
}

/// Run the pipeline and keep the error.
///
/// An empty `schema_url` leaves the inferred default `$schema` in place.
pub fn try_derive(yaml_text: &str, schema_url: &str) -> Result<Derived, DeriveError> {
    let value = parse_yaml(yaml_text)?;
    let json = serde_json::to_string_pretty(&value)?;

    let mut schema = infer_schema(&value);
    if !schema_url.is_empty()
        && let Value::Object(root) = &mut schema
    {
        root.insert("$schema".to_string(), Value::String(schema_url.to_string()));
    }
    let schema = serde_json::to_string_pretty(&schema)?;

    Ok(Derived { json, schema })
}

/// Run the pipeline, substituting [`Derived::invalid`] on any failure.
///
/// Never fails; the cause is logged at `warn`.
pub fn derive(yaml_text: &str, schema_url: &str) -> Derived {
    match try_derive(yaml_text, schema_url) {
        Ok(derived) => {
            tracing::debug!(
                json_len = derived.json.len(),
                schema_len = derived.schema.len(),
                "derived JSON and schema"
            );
            derived
        }
        Err(e) => {
            tracing::warn!(error = %e, "could not derive JSON from YAML");
            Derived::invalid()
        }
    }
}
