//! JSON Schema inference from example data.
//!
//! The value is first reduced to a [`Shape`], merging the shapes of array
//! elements, and the shape is then rendered as a draft-04 style schema:
//!
//! ```text
//! {"name": "x", "tags": ["a", "b"]}
//!
//! {
//!   "$schema": "http://json-schema.org/draft-04/schema#",
//!   "description": "",
//!   "type": "object",
//!   "properties": {
//!     "name": { "type": "string", "minLength": 1 },
//!     "tags": {
//!       "type": "array",
//!       "minItems": 1,
//!       "uniqueItems": true,
//!       "items": { "type": "string", "minLength": 1 }
//!     }
//!   },
//!   "required": ["name", "tags"]
//! }
//! ```
//!
//! Merge rules for array elements:
//! - `integer` and `number` merge to `number`
//! - strings keep `minLength: 1` only if every string was non-empty
//! - objects take the union of properties and the intersection of `required`
//! - arrays merge their items and keep `minItems`/`uniqueItems` only if all did
//! - anything else becomes `anyOf`, one member per kind

use std::collections::HashSet;

use serde_json::{Map, Value, json};

/// `$schema` written on every inferred root schema.
pub const DEFAULT_SCHEMA_URL: &str = "http://json-schema.org/draft-04/schema#";

/// The inferred structure of a value.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Null,
    Boolean,
    Integer,
    Number,
    String {
        non_empty: bool,
    },
    Array {
        /// Merged element shape; `None` for an empty array.
        items: Option<Box<Shape>>,
        non_empty: bool,
        unique: bool,
    },
    Object {
        /// Properties in first-seen order.
        properties: Vec<(String, Shape)>,
        required: Vec<String>,
    },
    AnyOf(Vec<Shape>),
}

/// Infer a root schema for `value`.
pub fn infer_schema(value: &Value) -> Value {
    let mut root = Map::new();
    root.insert("$schema".to_string(), json!(DEFAULT_SCHEMA_URL));
    root.insert("description".to_string(), json!(""));
    if let Value::Object(body) = Shape::of(value).to_schema() {
        root.extend(body);
    }
    Value::Object(root)
}

impl Shape {
    /// Reduce a value to its shape.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Shape::Null,
            Value::Bool(_) => Shape::Boolean,
            Value::Number(n) if n.is_f64() => Shape::Number,
            Value::Number(_) => Shape::Integer,
            Value::String(s) => Shape::String {
                non_empty: !s.is_empty(),
            },
            Value::Array(items) => Shape::Array {
                items: items
                    .iter()
                    .map(Shape::of)
                    .reduce(Shape::merge)
                    .map(Box::new),
                non_empty: !items.is_empty(),
                unique: all_distinct(items),
            },
            Value::Object(object) => Shape::Object {
                properties: object
                    .iter()
                    .map(|(key, value)| (key.clone(), Shape::of(value)))
                    .collect(),
                required: object.keys().cloned().collect(),
            },
        }
    }

    /// Combine two element shapes into one that describes both.
    pub fn merge(self, other: Shape) -> Shape {
        use Shape::*;

        match (self, other) {
            (Null, Null) => Null,
            (Boolean, Boolean) => Boolean,
            (Integer, Integer) => Integer,
            (Integer | Number, Integer | Number) => Number,
            (String { non_empty: a }, String { non_empty: b }) => String {
                non_empty: a && b,
            },
            (
                Array {
                    items: a_items,
                    non_empty: a_non_empty,
                    unique: a_unique,
                },
                Array {
                    items: b_items,
                    non_empty: b_non_empty,
                    unique: b_unique,
                },
            ) => Array {
                items: match (a_items, b_items) {
                    (Some(a), Some(b)) => Some(Box::new(a.merge(*b))),
                    (a, b) => a.or(b),
                },
                non_empty: a_non_empty && b_non_empty,
                unique: a_unique && b_unique,
            },
            (
                Object {
                    properties: mut a_props,
                    required: a_required,
                },
                Object {
                    properties: b_props,
                    required: b_required,
                },
            ) => {
                for (key, shape) in b_props {
                    match a_props.iter_mut().find(|(k, _)| *k == key) {
                        Some((_, existing)) => {
                            *existing = std::mem::replace(existing, Null).merge(shape);
                        }
                        None => a_props.push((key, shape)),
                    }
                }
                Object {
                    properties: a_props,
                    required: a_required
                        .into_iter()
                        .filter(|key| b_required.contains(key))
                        .collect(),
                }
            }
            (AnyOf(members), other) => AnyOf(absorb(members, other)),
            (this, AnyOf(members)) => AnyOf(members.into_iter().fold(vec![this], absorb)),
            (this, other) => AnyOf(absorb(vec![this], other)),
        }
    }

    fn kind(&self) -> u8 {
        match self {
            Shape::Null => 0,
            Shape::Boolean => 1,
            Shape::Integer | Shape::Number => 2,
            Shape::String { .. } => 3,
            Shape::Array { .. } => 4,
            Shape::Object { .. } => 5,
            Shape::AnyOf(_) => 6,
        }
    }

    /// Render the shape as a schema object.
    pub fn to_schema(&self) -> Value {
        match self {
            Shape::Null => json!({ "type": "null" }),
            Shape::Boolean => json!({ "type": "boolean" }),
            Shape::Integer => json!({ "type": "integer" }),
            Shape::Number => json!({ "type": "number" }),
            Shape::String { non_empty } => {
                let mut schema = Map::new();
                schema.insert("type".to_string(), json!("string"));
                if *non_empty {
                    schema.insert("minLength".to_string(), json!(1));
                }
                Value::Object(schema)
            }
            Shape::Array {
                items,
                non_empty,
                unique,
            } => {
                let mut schema = Map::new();
                schema.insert("type".to_string(), json!("array"));
                if *non_empty {
                    schema.insert("minItems".to_string(), json!(1));
                    if *unique {
                        schema.insert("uniqueItems".to_string(), json!(true));
                    }
                }
                if let Some(items) = items {
                    schema.insert("items".to_string(), items.to_schema());
                }
                Value::Object(schema)
            }
            Shape::Object {
                properties,
                required,
            } => {
                let properties: Map<String, Value> = properties
                    .iter()
                    .map(|(key, shape)| (key.clone(), shape.to_schema()))
                    .collect();
                json!({
                    "type": "object",
                    "properties": properties,
                    "required": required,
                })
            }
            Shape::AnyOf(members) => {
                let members: Vec<Value> = members.iter().map(Shape::to_schema).collect();
                json!({ "anyOf": members })
            }
        }
    }
}

/// Fold `shape` into a list of union members, merging with a member of the
/// same kind when there is one.
fn absorb(mut members: Vec<Shape>, shape: Shape) -> Vec<Shape> {
    if let Shape::AnyOf(inner) = shape {
        return inner.into_iter().fold(members, absorb);
    }
    match members.iter().position(|m| m.kind() == shape.kind()) {
        Some(idx) => {
            let existing = members.remove(idx);
            members.insert(idx, existing.merge(shape));
        }
        None => members.push(shape),
    }
    members
}

fn all_distinct(items: &[Value]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(canonical_key(item)))
}

/// Compact JSON text with object keys sorted, so values that compare equal
/// produce the same key regardless of property order.
fn canonical_key(value: &Value) -> String {
    match value {
        Value::Object(object) => {
            let mut entries: Vec<(&String, &Value)> = object.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let body: Vec<String> = entries
                .into_iter()
                .map(|(key, value)| {
                    format!("{}:{}", Value::from(key.as_str()), canonical_key(value))
                })
                .collect();
            format!("{{{}}}", body.join(","))
        }
        Value::Array(items) => {
            let body: Vec<String> = items.iter().map(canonical_key).collect();
            format!("[{}]", body.join(","))
        }
        scalar => scalar.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_carries_default_schema_and_description() {
        let schema = infer_schema(&json!({"a": 1}));
        assert_eq!(schema["$schema"], DEFAULT_SCHEMA_URL);
        assert_eq!(schema["description"], "");
        assert_eq!(schema["type"], "object");
    }

    #[test]
    fn test_root_key_order() {
        let schema = infer_schema(&json!({"a": 1}));
        let keys: Vec<&str> = schema
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(
            keys,
            ["$schema", "description", "type", "properties", "required"]
        );
    }

    #[test]
    fn test_scalars() {
        assert_eq!(Shape::of(&json!(null)).to_schema(), json!({"type": "null"}));
        assert_eq!(Shape::of(&json!(true)).to_schema(), json!({"type": "boolean"}));
        assert_eq!(Shape::of(&json!(3)).to_schema(), json!({"type": "integer"}));
        assert_eq!(Shape::of(&json!(3.5)).to_schema(), json!({"type": "number"}));
        assert_eq!(
            Shape::of(&json!("x")).to_schema(),
            json!({"type": "string", "minLength": 1})
        );
        assert_eq!(Shape::of(&json!("")).to_schema(), json!({"type": "string"}));
    }

    #[test]
    fn test_object_properties_and_required() {
        let schema = Shape::of(&json!({"name": "x", "age": 3})).to_schema();
        assert_eq!(
            schema,
            json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "minLength": 1},
                    "age": {"type": "integer"}
                },
                "required": ["name", "age"]
            })
        );
    }

    #[test]
    fn test_empty_array_has_no_items() {
        assert_eq!(Shape::of(&json!([])).to_schema(), json!({"type": "array"}));
    }

    #[test]
    fn test_array_unique_items() {
        let unique = Shape::of(&json!([1, 2, 3])).to_schema();
        assert_eq!(unique["uniqueItems"], true);
        assert_eq!(unique["minItems"], 1);
        assert_eq!(unique["items"], json!({"type": "integer"}));

        let repeated = Shape::of(&json!([1, 1])).to_schema();
        assert!(repeated.get("uniqueItems").is_none());
        assert_eq!(repeated["minItems"], 1);
    }

    #[test]
    fn test_reordered_objects_are_not_unique() {
        let schema = Shape::of(&json!([{"a": 1, "b": 2}, {"b": 2, "a": 1}])).to_schema();
        assert!(schema.get("uniqueItems").is_none());

        let schema = Shape::of(&json!([{"a": 1}, {"a": 2}])).to_schema();
        assert_eq!(schema["uniqueItems"], true);
    }

    #[test]
    fn test_large_sequence_uniqueness() {
        let items: Vec<Value> = (0..40_000).map(|i| json!(i)).collect();
        let schema = Shape::of(&Value::Array(items.clone())).to_schema();
        assert_eq!(schema["uniqueItems"], true);

        let mut repeated = items;
        repeated.push(json!(39_999));
        let schema = Shape::of(&Value::Array(repeated)).to_schema();
        assert!(schema.get("uniqueItems").is_none());
    }

    #[test]
    fn test_object_merges_into_existing_any_of_member() {
        let schema = Shape::of(&json!([{"a": 1}, "x", {"b": 2}])).to_schema();
        assert_eq!(
            schema["items"],
            json!({
                "anyOf": [
                    {
                        "type": "object",
                        "properties": {
                            "a": {"type": "integer"},
                            "b": {"type": "integer"}
                        },
                        "required": []
                    },
                    {"type": "string", "minLength": 1}
                ]
            })
        );
    }

    #[test]
    fn test_merged_arrays_drop_unique_items_unless_both_unique() {
        let schema = Shape::of(&json!([[1, 2], [3, 3]])).to_schema();
        assert_eq!(
            schema["items"],
            json!({"type": "array", "minItems": 1, "items": {"type": "integer"}})
        );

        let schema = Shape::of(&json!([[1, 2], [3, 4]])).to_schema();
        assert_eq!(schema["items"]["uniqueItems"], true);
    }

    #[test]
    fn test_integer_and_number_merge_to_number() {
        let schema = Shape::of(&json!([1, 2.5])).to_schema();
        assert_eq!(schema["items"], json!({"type": "number"}));
    }

    #[test]
    fn test_empty_string_drops_min_length() {
        let schema = Shape::of(&json!(["a", ""])).to_schema();
        assert_eq!(schema["items"], json!({"type": "string"}));
    }

    #[test]
    fn test_array_of_objects_merges_properties() {
        let schema = Shape::of(&json!([
            {"id": 1, "name": "a"},
            {"id": 2, "email": "b@example.com"}
        ]))
        .to_schema();
        assert_eq!(
            schema["items"],
            json!({
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "name": {"type": "string", "minLength": 1},
                    "email": {"type": "string", "minLength": 1}
                },
                "required": ["id"]
            })
        );
    }

    #[test]
    fn test_mixed_kinds_become_any_of() {
        let schema = Shape::of(&json!([1, "a", null, 2.5])).to_schema();
        assert_eq!(
            schema["items"],
            json!({
                "anyOf": [
                    {"type": "number"},
                    {"type": "string", "minLength": 1},
                    {"type": "null"}
                ]
            })
        );
    }

    #[test]
    fn test_nested_unions_flatten() {
        let merged = Shape::of(&json!(1))
            .merge(Shape::of(&json!("a")))
            .merge(Shape::of(&json!(null)).merge(Shape::of(&json!(true))));
        match merged {
            Shape::AnyOf(members) => assert_eq!(members.len(), 4),
            other => panic!("Expected AnyOf, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_arrays_merge_items() {
        let schema = Shape::of(&json!([[1], [], [2.0]])).to_schema();
        assert_eq!(
            schema["items"],
            json!({"type": "array", "items": {"type": "number"}})
        );
    }

    #[test]
    fn test_scalar_root() {
        let schema = infer_schema(&json!(null));
        assert_eq!(
            schema,
            json!({
                "$schema": DEFAULT_SCHEMA_URL,
                "description": "",
                "type": "null"
            })
        );
    }
}
