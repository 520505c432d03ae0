//! Field extraction and flattening
//!
//! Walks the `spec` or `status` section of a version schema and turns every
//! property into a [`Field`] row. Nested objects produce nested rows, which
//! [`flatten_fields`] later lays out for a single table.

use std::cmp::Ordering;

use super::schema::SchemaNode;
use crate::format::{format_constraints, format_default, format_type};

/// Top-level section of an XRD schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Spec,
    Status,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spec => "spec",
            Self::Status => "status",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A documented field
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Field {
    pub name: String,
    /// Formatted type (`string`, `object`, `list(string)`, ...)
    pub type_: String,
    pub description: String,
    /// Required by its immediate parent
    pub required: bool,
    /// Formatted default, empty when unset
    pub default: String,
    /// Formatted constraints, empty when unset
    pub constraints: String,
    /// Children of an expanded object field
    pub nested: Vec<Field>,
    /// Nesting depth, 0 for direct children of the section
    pub level: usize,
}

impl Field {
    fn from_node(name: &str, node: &SchemaNode, required: bool, level: usize) -> Self {
        Self {
            name: name.to_string(),
            type_: format_type(node),
            description: node.description.clone().unwrap_or_default(),
            required,
            default: format_default(node.default.as_ref()),
            constraints: format_constraints(node),
            nested: Vec::new(),
            level,
        }
    }
}

/// Extract the fields of one section of a version's root schema
///
/// A missing section, or one without properties, yields no fields.
pub fn extract_fields(root: &SchemaNode, section: Section, show_nested: bool) -> Vec<Field> {
    match root.properties.get(section.as_str()) {
        Some(target) => extract_children(target, 0, show_nested),
        None => {
            tracing::debug!(%section, "section not present in schema");
            Vec::new()
        }
    }
}

/// Extract the direct children of an object node
///
/// Required-ness comes from `parent.required` only; each level of the tree
/// carries its own list.
fn extract_children(parent: &SchemaNode, level: usize, show_nested: bool) -> Vec<Field> {
    parent
        .properties
        .iter()
        .map(|(name, node)| {
            let mut field = Field::from_node(name, node, parent.is_required(name), level);
            if show_nested && node.is_object() && node.has_nested_properties() {
                field.nested = extract_children(node, level + 1, show_nested);
            }
            tracing::trace!(name = %field.name, level, type_ = %field.type_, "extracted field");
            field
        })
        .collect()
}

/// Flatten nested fields into table order
///
/// Pre-order: each field is followed by its whole subtree before the next
/// sibling. Levels are kept; the emitted rows have no `nested` children.
pub fn flatten_fields(fields: &[Field]) -> Vec<Field> {
    let mut result = Vec::new();
    flatten_into(fields, &mut result);
    result
}

fn flatten_into(fields: &[Field], out: &mut Vec<Field>) {
    for field in fields {
        out.push(Field {
            nested: Vec::new(),
            ..field.clone()
        });
        flatten_into(&field.nested, out);
    }
}

/// Sort spec fields: required first, then by name
pub fn sort_spec_fields(fields: &mut [Field]) {
    fields.sort_by(|a, b| match b.required.cmp(&a.required) {
        Ordering::Equal => a.name.cmp(&b.name),
        other => other,
    });
}

/// Sort status fields by name
pub fn sort_status_fields(fields: &mut [Field]) {
    fields.sort_by(|a, b| a.name.cmp(&b.name));
}
