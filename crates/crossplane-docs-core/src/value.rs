//! Absent-tolerant accessors over parsed YAML documents
//!
//! Documents are parsed with `serde_yaml` into a `serde_json::Value`. Lookups
//! never fail: a missing key, a value of the wrong shape, or a broken dotted
//! path all read as "nothing there".

use serde_json::Value;
use std::path::Path;

use crate::error::{DocsError, Result};

/// Parse YAML text into a document value
///
/// The top level must be a mapping.
pub fn parse_document(yaml: &str) -> Result<Value> {
    let value: Value = serde_yaml::from_str(yaml)?;
    if !value.is_object() {
        return Err(DocsError::invalid("top-level YAML node is not a mapping"));
    }
    Ok(value)
}

/// Read and parse a YAML document from disk
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    parse_document(&content)
}

/// Convenience accessors used by the model parsers
pub trait ValueExt {
    /// String under `key`, empty when missing or not a string
    fn str_at(&self, key: &str) -> &str;

    /// Sequence under `key`, empty when missing or not a sequence
    fn seq_at(&self, key: &str) -> &[Value];

    /// Resolve a dotted path (`metadata.name`) through nested mappings
    fn lookup(&self, path: &str) -> Option<&Value>;

    /// String at a dotted path, empty when any segment is missing
    fn str_path(&self, path: &str) -> &str {
        self.lookup(path).and_then(Value::as_str).unwrap_or_default()
    }
}

impl ValueExt for Value {
    fn str_at(&self, key: &str) -> &str {
        self.get(key).and_then(Value::as_str).unwrap_or_default()
    }

    fn seq_at(&self, key: &str) -> &[Value] {
        self.get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        let mut current = self;
        for segment in path.split('.') {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }
}

/// Natural textual form of a value for table cells
///
/// Null renders empty, strings are unquoted and numbers keep only the digits
/// their value needs. Sequences and mappings fall back to compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            // f64 Display drops the fractional part of whole values
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
