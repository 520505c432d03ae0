//! Composition model and parser
//!
//! Only the outer shape of a Composition is typed. Resource entries stay as
//! raw document values because the same resource shape shows up both in
//! `spec.resources` and inside free-form function inputs.

use serde_json::Value;

use crate::error::Result;
use crate::value::{ValueExt, parse_document};

/// Mode value that switches resource discovery to the function pipeline
pub const PIPELINE_MODE: &str = "Pipeline";

/// A parsed Crossplane Composition
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Composition {
    pub api_version: String,
    pub kind: String,
    /// metadata.name, if present
    pub name: Option<String>,
    /// The composite resource type this composition satisfies
    pub composite_type_ref: TypeRef,
    /// `Resources` or `Pipeline`; unset on older compositions
    pub mode: Option<String>,
    /// Static `spec.resources` entries
    pub resources: Vec<Value>,
    /// Function pipeline steps
    pub pipeline: Vec<PipelineStep>,
}

impl Composition {
    /// Whether resources come from the function pipeline
    pub fn is_pipeline(&self) -> bool {
        self.mode.as_deref() == Some(PIPELINE_MODE) && !self.pipeline.is_empty()
    }
}

/// Reference to a composite resource type
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TypeRef {
    pub api_version: String,
    pub kind: String,
}

/// One step of a function pipeline
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineStep {
    pub step: String,
    /// functionRef.name
    pub function_ref: String,
    /// Function-specific input, `Null` when absent
    pub input: Value,
}

/// Parser for Composition YAML manifests
pub struct CompositionParser;

impl CompositionParser {
    /// Parse a Composition YAML manifest
    pub fn parse(yaml: &str) -> Result<Composition> {
        let value = parse_document(yaml)?;
        Ok(Self::parse_value(&value))
    }

    /// Parse from an already loaded document
    pub fn parse_value(value: &Value) -> Composition {
        let spec = value.get("spec").unwrap_or(&Value::Null);

        Composition {
            api_version: value.str_at("apiVersion").to_string(),
            kind: value.str_at("kind").to_string(),
            name: value
                .lookup("metadata.name")
                .and_then(Value::as_str)
                .map(String::from),
            composite_type_ref: TypeRef {
                api_version: spec.str_path("compositeTypeRef.apiVersion").to_string(),
                kind: spec.str_path("compositeTypeRef.kind").to_string(),
            },
            mode: spec
                .get("mode")
                .and_then(Value::as_str)
                .filter(|m| !m.is_empty())
                .map(String::from),
            resources: spec.seq_at("resources").to_vec(),
            pipeline: spec
                .seq_at("pipeline")
                .iter()
                .filter(|s| s.is_object())
                .map(Self::parse_step)
                .collect(),
        }
    }

    fn parse_step(step: &Value) -> PipelineStep {
        PipelineStep {
            step: step.str_at("step").to_string(),
            function_ref: step.str_path("functionRef.name").to_string(),
            input: step.get("input").cloned().unwrap_or(Value::Null),
        }
    }
}
