//! Composition command - document a Composition's managed resources and patches

use crossplane_docs_core::CompositionGenerator;
use std::path::Path;

use crate::error::Result;
use crate::util::{emit, ensure_exists};

pub fn run(file: &Path, output: Option<&Path>, show_patches: bool) -> Result<()> {
    ensure_exists(file)?;

    tracing::debug!(file = %file.display(), show_patches, "generating composition documentation");

    let markdown = CompositionGenerator::default()
        .show_patches(show_patches)
        .generate_file(file)?;

    emit(&markdown, output)
}
