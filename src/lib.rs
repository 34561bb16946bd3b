//! # yaml-schema-rs
//!
//! Convert YAML text to pretty-printed JSON and an inferred JSON Schema.
//!
//! ## Overview
//!
//! The derivation pipeline takes two inputs:
//! - **Document text**: the YAML source
//! - **Schema URL**: a `$schema` override, empty to keep the default
//!
//! and produces two outputs, the JSON rendering of the document and a schema
//! describing its shape. Any failure turns both outputs into the placeholder
//! `"Invalid YAML"`.
//!
//! ## Example
//!
//! ```
//! use yaml_schema_rs::{INVALID_YAML, derive};
//!
//! let derived = derive("a: 1", "");
//! assert_eq!(derived.json, "{\n  \"a\": 1\n}");
//! assert!(derived.schema.contains("\"type\": \"integer\""));
//!
//! let broken = derive("a:\n  b: 1\n c: 2", "");
//! assert_eq!(broken.json, INVALID_YAML);
//! assert_eq!(broken.schema, INVALID_YAML);
//! ```

pub mod convert;
pub mod derive;
pub mod error;
pub mod infer;
pub mod sample;

pub use convert::parse_yaml;
pub use derive::{Derived, INVALID_YAML, derive, try_derive};
pub use error::DeriveError;
pub use infer::{DEFAULT_SCHEMA_URL, Shape, infer_schema};
pub use sample::INITIAL_YAML;
