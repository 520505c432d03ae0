//! Xrd command - document a CompositeResourceDefinition

use crossplane_docs_core::XrdGenerator;
use std::path::Path;

use crate::error::Result;
use crate::util::{emit, ensure_exists};

pub fn run(file: &Path, output: Option<&Path>, show_nested: bool) -> Result<()> {
    ensure_exists(file)?;

    tracing::debug!(file = %file.display(), show_nested, "generating XRD documentation");

    let markdown = XrdGenerator::default()
        .show_nested(show_nested)
        .generate_file(file)?;

    emit(&markdown, output)
}
