//! Composition support
//!
//! - `model`: typed outer shape of a Composition and its parser
//! - `extract`: managed resource discovery and patch classification

mod extract;
mod model;

pub use extract::{
    DIRECT_COPY, ManagedResource, PatchInfo, ResourceSource, classify_transformation,
    extract_patches, extract_resource, extract_resources,
};
pub use model::{Composition, CompositionParser, PIPELINE_MODE, PipelineStep, TypeRef};
