//! XRD YAML parser
//!
//! Parses CompositeResourceDefinition manifests into a structured `Xrd`.
//! Parsing is lenient: anything missing becomes an empty value and is left
//! for the generator to decide on.

use serde_json::Value;

use super::schema::{SchemaNode, Xrd, XrdNames, XrdVersion};
use crate::error::Result;
use crate::value::{ValueExt, parse_document};

/// Kind expected at the top of an XRD manifest
pub const XRD_KIND: &str = "CompositeResourceDefinition";

/// Parser for XRD YAML manifests
pub struct XrdParser;

impl XrdParser {
    /// Parse an XRD YAML manifest
    pub fn parse(yaml: &str) -> Result<Xrd> {
        let value = parse_document(yaml)?;
        Ok(Self::parse_value(&value))
    }

    /// Parse from an already loaded document
    pub fn parse_value(value: &Value) -> Xrd {
        let kind = value.str_at("kind");
        if kind != XRD_KIND {
            tracing::warn!(kind, "document is not a {}, parsing anyway", XRD_KIND);
        }

        let spec = value.get("spec").unwrap_or(&Value::Null);

        Xrd {
            api_version: value.str_at("apiVersion").to_string(),
            kind: kind.to_string(),
            name: value.str_path("metadata.name").to_string(),
            group: spec.str_at("group").to_string(),
            names: spec.get("names").map(Self::parse_names).unwrap_or_default(),
            claim_names: spec
                .get("claimNames")
                .filter(|v| v.is_object())
                .map(Self::parse_names),
            versions: spec
                .seq_at("versions")
                .iter()
                .filter(|v| v.is_object())
                .map(Self::parse_version)
                .collect(),
        }
    }

    /// Parse a names / claimNames section
    fn parse_names(names: &Value) -> XrdNames {
        XrdNames {
            kind: names.str_at("kind").to_string(),
            plural: names.str_at("plural").to_string(),
            singular: names
                .get("singular")
                .and_then(Value::as_str)
                .map(String::from),
        }
    }

    /// Parse a single XRD version
    fn parse_version(version: &Value) -> XrdVersion {
        XrdVersion {
            name: version.str_at("name").to_string(),
            served: version
                .get("served")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            referenceable: version
                .get("referenceable")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            schema: version
                .lookup("schema.openAPIV3Schema")
                .map(Self::parse_schema_node)
                .unwrap_or_default(),
        }
    }

    /// Parse a single schema node (recursive)
    pub fn parse_schema_node(node: &Value) -> SchemaNode {
        let properties = node
            .get("properties")
            .and_then(Value::as_object)
            .map(|obj| {
                obj.iter()
                    .map(|(k, v)| (k.clone(), Self::parse_schema_node(v)))
                    .collect()
            })
            .unwrap_or_default();

        let required = node
            .seq_at("required")
            .iter()
            .filter_map(Value::as_str)
            .map(String::from)
            .collect();

        SchemaNode {
            type_: node.str_at("type").to_string(),
            description: node
                .get("description")
                .and_then(Value::as_str)
                .map(String::from),
            properties,
            items: node
                .get("items")
                .filter(|v| v.is_object())
                .map(|v| Box::new(Self::parse_schema_node(v))),
            required,
            default: node.get("default").filter(|v| !v.is_null()).cloned(),
            enum_values: node.seq_at("enum").to_vec(),
            minimum: node.get("minimum").and_then(Value::as_f64),
            maximum: node.get("maximum").and_then(Value::as_f64),
            min_items: node.get("minItems").and_then(Value::as_u64),
            max_items: node.get("maxItems").and_then(Value::as_u64),
        }
    }
}
