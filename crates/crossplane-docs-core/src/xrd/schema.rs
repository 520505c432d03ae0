//! XRD schema representation
//!
//! Structured types for a CompositeResourceDefinition and the OpenAPI v3
//! schema tree of each of its versions. Only the attributes that end up in
//! the generated documentation are modelled.

use serde_json::Value;
use std::collections::BTreeMap;

/// A parsed CompositeResourceDefinition
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Xrd {
    /// Document apiVersion (e.g., "apiextensions.crossplane.io/v1")
    pub api_version: String,
    /// Document kind (normally "CompositeResourceDefinition")
    pub kind: String,
    /// metadata.name (e.g., "xdatabases.example.org")
    pub name: String,
    /// API group of the composite resource (e.g., "example.org")
    pub group: String,
    /// Composite resource names
    pub names: XrdNames,
    /// Claim names, when the XRD offers a namespaced claim
    pub claim_names: Option<XrdNames>,
    /// Declared versions, in declaration order
    pub versions: Vec<XrdVersion>,
}

impl Xrd {
    /// Pick the version to document
    ///
    /// The first served version wins. When nothing is served the first
    /// declared version is used instead.
    pub fn documented_version(&self) -> Option<&XrdVersion> {
        self.versions
            .iter()
            .find(|v| v.served)
            .or_else(|| self.versions.first())
    }

    /// Kind users write in manifests: the claim kind if there is one
    pub fn example_kind(&self) -> &str {
        self.claim_names
            .as_ref()
            .map(|c| c.kind.as_str())
            .unwrap_or(&self.names.kind)
    }
}

/// Resource naming information
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XrdNames {
    /// Kind (e.g., "XDatabase")
    pub kind: String,
    /// Plural name (e.g., "xdatabases")
    pub plural: String,
    /// Singular name (e.g., "xdatabase")
    pub singular: Option<String>,
}

/// A single API version of an XRD
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XrdVersion {
    /// Version name (e.g., "v1alpha1")
    pub name: String,
    /// Whether this version is served
    pub served: bool,
    /// Whether compositions may reference this version
    pub referenceable: bool,
    /// Root of `schema.openAPIV3Schema`
    pub schema: SchemaNode,
}

impl XrdVersion {
    /// Description of the root schema, empty if absent
    pub fn description(&self) -> &str {
        self.schema.description.as_deref().unwrap_or_default()
    }
}

/// One node of an OpenAPI v3 schema tree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaNode {
    /// Declared type, kept verbatim (empty when omitted)
    pub type_: String,
    /// Human-readable description
    pub description: Option<String>,
    /// Nested object properties
    pub properties: BTreeMap<String, SchemaNode>,
    /// Array item schema
    pub items: Option<Box<SchemaNode>>,
    /// Names of the direct children that are required
    pub required: Vec<String>,
    /// Default value (a YAML null is stored as `None`)
    pub default: Option<Value>,
    /// Allowed values
    pub enum_values: Vec<Value>,
    /// Minimum value for numbers
    pub minimum: Option<f64>,
    /// Maximum value for numbers
    pub maximum: Option<f64>,
    /// Minimum array items
    pub min_items: Option<u64>,
    /// Maximum array items
    pub max_items: Option<u64>,
}

impl SchemaNode {
    /// Create a node of the given type
    pub fn typed(type_: &str) -> Self {
        Self {
            type_: type_.to_string(),
            ..Default::default()
        }
    }

    /// Create an object node with nested properties
    pub fn object(properties: BTreeMap<String, SchemaNode>) -> Self {
        Self {
            type_: "object".to_string(),
            properties,
            ..Default::default()
        }
    }

    /// Create an array node with an item schema
    pub fn array(items: SchemaNode) -> Self {
        Self {
            type_: "array".to_string(),
            items: Some(Box::new(items)),
            ..Default::default()
        }
    }

    /// Mark the given children as required
    pub fn with_required(mut self, names: &[&str]) -> Self {
        self.required = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn is_object(&self) -> bool {
        self.type_ == "object"
    }

    pub fn is_array(&self) -> bool {
        self.type_ == "array"
    }

    /// Check if this node has nested properties
    pub fn has_nested_properties(&self) -> bool {
        !self.properties.is_empty()
    }

    /// Check if a direct child is required
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}
