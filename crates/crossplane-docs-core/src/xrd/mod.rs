//! CompositeResourceDefinition support
//!
//! - `schema`: structured XRD and OpenAPI schema types
//! - `parser`: YAML to `Xrd`
//! - `fields`: field extraction, flattening and ordering

mod fields;
mod parser;
mod schema;

pub use fields::{
    Field, Section, extract_fields, flatten_fields, sort_spec_fields, sort_status_fields,
};
pub use parser::{XRD_KIND, XrdParser};
pub use schema::{SchemaNode, Xrd, XrdNames, XrdVersion};
