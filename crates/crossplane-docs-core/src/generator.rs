//! Documentation generators
//!
//! Each generator takes a loaded document and produces the full markdown
//! page. `generate_str` and `generate_file` are thin wrappers that parse
//! YAML text first.

use serde_json::Value;
use std::path::Path;

use crate::composition::{CompositionParser, extract_resources};
use crate::error::{DocsError, Result};
use crate::render::{render_composition, render_xrd};
use crate::value::{load_document, parse_document};
use crate::xrd::{
    Section, XrdParser, extract_fields, flatten_fields, sort_spec_fields, sort_status_fields,
};

/// Options for XRD documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XrdOptions {
    /// Expand nested object fields
    pub show_nested: bool,
}

impl Default for XrdOptions {
    fn default() -> Self {
        Self { show_nested: true }
    }
}

/// Options for Composition documentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionOptions {
    /// Include per-resource field mappings
    pub show_patches: bool,
}

impl Default for CompositionOptions {
    fn default() -> Self {
        Self { show_patches: true }
    }
}

/// Generates markdown for CompositeResourceDefinitions
#[derive(Debug, Clone, Default)]
pub struct XrdGenerator {
    options: XrdOptions,
}

impl XrdGenerator {
    pub fn new(options: XrdOptions) -> Self {
        Self { options }
    }

    /// Expand nested object fields (default: true)
    pub fn show_nested(mut self, show_nested: bool) -> Self {
        self.options.show_nested = show_nested;
        self
    }

    /// Generate from an XRD file
    pub fn generate_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        self.generate(&load_document(path)?)
    }

    /// Generate from XRD YAML text
    pub fn generate_str(&self, yaml: &str) -> Result<String> {
        self.generate(&parse_document(yaml)?)
    }

    /// Generate from a loaded XRD document
    ///
    /// Fails only when the XRD declares no versions.
    pub fn generate(&self, document: &Value) -> Result<String> {
        let xrd = XrdParser::parse_value(document);
        let version = xrd.documented_version().ok_or(DocsError::NoVersions)?;

        tracing::debug!(
            kind = %xrd.names.kind,
            version = %version.name,
            served = version.served,
            "documenting XRD version"
        );

        let show_nested = self.options.show_nested;
        let mut spec_fields = extract_fields(&version.schema, Section::Spec, show_nested);
        let mut status_fields = extract_fields(&version.schema, Section::Status, show_nested);

        sort_spec_fields(&mut spec_fields);
        sort_status_fields(&mut status_fields);

        let spec_rows = flatten_fields(&spec_fields);
        let status_rows = flatten_fields(&status_fields);

        Ok(render_xrd(&xrd, version, &spec_rows, &status_rows))
    }
}

/// Generates markdown for Compositions
#[derive(Debug, Clone, Default)]
pub struct CompositionGenerator {
    options: CompositionOptions,
}

impl CompositionGenerator {
    pub fn new(options: CompositionOptions) -> Self {
        Self { options }
    }

    /// Include field mappings (default: true)
    pub fn show_patches(mut self, show_patches: bool) -> Self {
        self.options.show_patches = show_patches;
        self
    }

    /// Generate from a Composition file
    pub fn generate_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        self.generate(&load_document(path)?)
    }

    /// Generate from Composition YAML text
    pub fn generate_str(&self, yaml: &str) -> Result<String> {
        self.generate(&parse_document(yaml)?)
    }

    /// Generate from a loaded Composition document
    pub fn generate(&self, document: &Value) -> Result<String> {
        let comp = CompositionParser::parse_value(document);
        let resources = extract_resources(&comp, self.options.show_patches);

        tracing::debug!(
            name = comp.name.as_deref().unwrap_or_default(),
            resources = resources.len(),
            "documenting composition"
        );

        Ok(render_composition(&comp, &resources, self.options.show_patches))
    }
}
