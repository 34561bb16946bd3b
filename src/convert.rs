//! YAML text to JSON value conversion.
//!
//! YAML is richer than JSON: it has tags, anchors, non-string mapping keys
//! and non-finite floats. The conversion keeps the JSON-compatible subset and
//! folds the rest the way a browser would when it stringifies the parsed
//! document:
//!
//! - tags are dropped, the tagged value is kept
//! - anchors and aliases are expanded
//! - `<<` merge keys are applied when every merge value is a mapping (or a
//!   list of mappings); otherwise `<<` stays an ordinary key
//! - scalar keys are stringified (`1` -> `"1"`, `true` -> `"true"`, `~` -> `"null"`)
//! - `.nan` and `.inf` become `null`
//!
//! A document with no content (empty, whitespace, comments or bare `---` /
//! `...` markers) is `null`.

use serde_json::{Map, Number, Value};
use serde_yaml::Value as Yaml;

use crate::error::DeriveError;

/// Parse a single YAML document into a JSON value.
pub fn parse_yaml(text: &str) -> Result<Value, DeriveError> {
    if is_blank(text) {
        return Ok(Value::Null);
    }

    let yaml: Yaml = serde_yaml::from_str(text)?;
    yaml_to_json(&with_merge_keys(yaml))
}

/// Apply `<<` merge keys, leaving the document untouched if any merge value
/// is not a mapping.
fn with_merge_keys(yaml: Yaml) -> Yaml {
    let mut merged = yaml.clone();
    match merged.apply_merge() {
        Ok(()) => merged,
        Err(e) => {
            tracing::debug!(error = %e, "keeping `<<` as a plain key");
            yaml
        }
    }
}

/// True when the text holds nothing but whitespace, comments and document
/// markers.
fn is_blank(text: &str) -> bool {
    text.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

fn yaml_to_json(yaml: &Yaml) -> Result<Value, DeriveError> {
    match yaml {
        Yaml::Null => Ok(Value::Null),
        Yaml::Bool(b) => Ok(Value::Bool(*b)),
        Yaml::Number(n) => Ok(number_to_json(n)),
        Yaml::String(s) => Ok(Value::String(s.clone())),
        Yaml::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Yaml::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(key_to_string(key)?, yaml_to_json(value)?);
            }
            Ok(Value::Object(object))
        }
        Yaml::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

fn number_to_json(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::Number(Number::from(i))
    } else if let Some(u) = n.as_u64() {
        Value::Number(Number::from(u))
    } else {
        // Non-finite floats have no JSON form.
        n.as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

fn key_to_string(key: &Yaml) -> Result<String, DeriveError> {
    match key {
        Yaml::String(s) => Ok(s.clone()),
        Yaml::Number(n) => Ok(n.to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Tagged(tagged) => key_to_string(&tagged.value),
        Yaml::Sequence(_) | Yaml::Mapping(_) => {
            Err(DeriveError::UnsupportedKey(format!("{key:?}")))
        }
    }
}
