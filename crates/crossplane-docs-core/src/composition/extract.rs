//! Managed resource and patch extraction
//!
//! Resources are discovered either from the static `spec.resources` list or
//! from the `resources` key of each pipeline step's function input. Both
//! sources hand the same raw resource mappings to one extraction routine.

use serde_json::Value;

use super::model::{Composition, PipelineStep};
use crate::value::ValueExt;

/// Label used for patches that copy a value unchanged
pub const DIRECT_COPY: &str = "Direct copy";

/// A documented managed resource
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManagedResource {
    pub name: String,
    pub kind: String,
    pub api_version: String,
    pub patches: Vec<PatchInfo>,
}

/// A documented field mapping
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PatchInfo {
    /// fromFieldPath, may be empty
    pub source_field: String,
    /// toFieldPath
    pub target_field: String,
    pub transformation: String,
}

/// Where a composition keeps its resource definitions
#[derive(Debug, Clone, Copy)]
pub enum ResourceSource<'a> {
    /// `spec.resources`
    Static(&'a [Value]),
    /// `input.resources` of every pipeline step
    Pipeline(&'a [PipelineStep]),
}

impl<'a> ResourceSource<'a> {
    /// Choose the source for a composition
    pub fn for_composition(comp: &'a Composition) -> Self {
        if comp.is_pipeline() {
            Self::Pipeline(&comp.pipeline)
        } else {
            Self::Static(&comp.resources)
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Static(_) => "static",
            Self::Pipeline(_) => "pipeline",
        }
    }

    /// Raw resource entries, in declaration order
    pub fn entries(&self) -> Vec<&'a Value> {
        match *self {
            Self::Static(resources) => resources.iter().collect(),
            Self::Pipeline(steps) => steps
                .iter()
                .flat_map(|step| {
                    let resources = step.input.seq_at("resources");
                    if resources.is_empty() {
                        tracing::debug!(step = %step.step, "pipeline step declares no resources");
                    }
                    resources
                })
                .collect(),
        }
    }
}

/// Extract every managed resource of a composition, sorted by name
pub fn extract_resources(comp: &Composition, show_patches: bool) -> Vec<ManagedResource> {
    let source = ResourceSource::for_composition(comp);
    tracing::debug!(source = source.label(), "extracting composition resources");

    let mut resources: Vec<ManagedResource> = source
        .entries()
        .into_iter()
        .filter_map(|entry| {
            if !entry.is_object() {
                tracing::debug!("skipping resource entry that is not a mapping");
                return None;
            }
            Some(extract_resource(entry, show_patches))
        })
        .collect();

    resources.sort_by(|a, b| a.name.cmp(&b.name));
    resources
}

/// Extract one resource mapping
pub fn extract_resource(resource: &Value, show_patches: bool) -> ManagedResource {
    let patches = if show_patches {
        extract_patches(resource.seq_at("patches"))
    } else {
        Vec::new()
    };

    ManagedResource {
        name: resource.str_at("name").to_string(),
        kind: resource.str_path("base.kind").to_string(),
        api_version: resource.str_path("base.apiVersion").to_string(),
        patches,
    }
}

/// Extract field mappings from a patch list
///
/// Entries that are not mappings, or that have neither a source nor a target
/// path, are dropped.
pub fn extract_patches(patches: &[Value]) -> Vec<PatchInfo> {
    patches
        .iter()
        .filter(|p| p.is_object())
        .map(|patch| PatchInfo {
            source_field: patch.str_at("fromFieldPath").to_string(),
            target_field: patch.str_at("toFieldPath").to_string(),
            transformation: classify_transformation(patch),
        })
        .filter(|info| !info.source_field.is_empty() || !info.target_field.is_empty())
        .collect()
}

/// Describe what a patch does to its value
///
/// A combine format string wins. Plain composite field path patches, or
/// untyped patches with a source path and no combine, are direct copies.
/// Anything else is labelled with its patch type.
pub fn classify_transformation(patch: &Value) -> String {
    if let Some(fmt) = patch.lookup("combine.string.fmt").and_then(Value::as_str) {
        return fmt.to_string();
    }

    let patch_type = patch.str_at("type");
    match patch_type {
        "FromCompositeFieldPath" | "ToCompositeFieldPath" => DIRECT_COPY.to_string(),
        "" if !patch.str_at("fromFieldPath").is_empty() && patch.get("combine").is_none() => {
            DIRECT_COPY.to_string()
        }
        other => other.to_string(),
    }
}
