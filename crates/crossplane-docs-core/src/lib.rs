//! crossplane-docs core - markdown documentation for Crossplane resources
//!
//! This crate turns CompositeResourceDefinitions and Compositions into
//! terraform-docs style markdown:
//! - `value`: absent-tolerant access to parsed YAML documents
//! - `xrd`: XRD model, parser, field extraction and flattening
//! - `composition`: Composition model, resource discovery and patch classification
//! - `format`: type, default and constraint display strings
//! - `render`: markdown document renderers
//! - `generator`: end-to-end generators tying the above together

pub mod composition;
pub mod error;
pub mod format;
pub mod generator;
pub mod render;
pub mod value;
pub mod xrd;

pub use composition::{Composition, CompositionParser, ManagedResource, PatchInfo};
pub use error::{DocsError, Result};
pub use generator::{CompositionGenerator, CompositionOptions, XrdGenerator, XrdOptions};
pub use xrd::{Field, SchemaNode, Xrd, XrdParser};
