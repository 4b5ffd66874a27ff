use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One point-in-time snapshot of the data model. A new parse always produces
/// a new value; snapshots are never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParsedSchema {
    /// Models in source order. Order is load-bearing: it decides column
    /// ordering in generated CREATE TABLE statements.
    pub models: Vec<Model>,
    /// Enum declarations are recognized but not yet interpreted; the
    /// collection stays empty and exists for forward compatibility of the
    /// serialized shape.
    pub enums: Vec<EnumDecl>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Model {
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    /// Logical type name (string/integer/float/boolean/timestamp/json).
    /// Unrecognized types pass through as opaque text.
    pub type_name: String,
    /// Type-level markers stripped off the type token: "array" for a
    /// trailing `[]`, "optional" for a trailing `?`.
    pub modifiers: BTreeSet<String>,
    /// Raw `@...` tokens, text verbatim and order-preserving. Equality for
    /// change detection treats these as a sorted multiset instead.
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnumDecl {
    pub name: String,
    pub values: Vec<String>,
}

/// A persisted pair of SQL scripts derived from one or more changes.
/// Created once by codegen, immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    pub id: String,
    pub name: String,
    pub timestamp: String,
    pub up_sql: String,
    pub down_sql: String,
}

impl ParsedSchema {
    pub fn new() -> Self {
        ParsedSchema {
            models: Vec::new(),
            enums: Vec::new(),
        }
    }

    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }

    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let json = serde_json::to_string(self).expect("schema must serialize");
        let hash = Sha256::digest(json.as_bytes());
        hex::encode(hash)
    }
}

impl Default for ParsedSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl Model {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl Field {
    pub fn is_array(&self) -> bool {
        self.modifiers.contains("array")
    }

    pub fn is_optional(&self) -> bool {
        self.modifiers.contains("optional")
    }

    /// True when an attribute is exactly `marker` or `marker(...)`, so
    /// `@unique` matches both `@unique` and `@unique(map: "x")` while
    /// `@id` never matches `@ignore`.
    pub fn has_attribute(&self, marker: &str) -> bool {
        self.attributes
            .iter()
            .any(|a| a == marker || (a.starts_with(marker) && a[marker.len()..].starts_with('(')))
    }
}
