//! Initial editor content.

/// Sample document shown when the editor first opens.
pub const INITIAL_YAML: &str = r#"# Edit this document to see its JSON and JSON Schema
name: yaml-schema-rs
version: 1.0.0
private: true
description: Convert YAML to JSON and an inferred JSON Schema
keywords:
  - yaml
  - json
  - schema
author:
  name: Jane Doe
  email: jane@example.com
  url: null
stats:
  downloads: 1024
  rating: 4.5
releases:
  - tag: v0.1.0
    stable: false
  - tag: v1.0.0
    stable: true
    notes: First stable release
"#;
