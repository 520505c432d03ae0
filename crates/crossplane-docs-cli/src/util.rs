//! Shared helpers for CLI commands

use console::style;
use std::fs;
use std::path::Path;

use crate::error::{CliError, Result};

/// Fail early with a clear message when the input file is missing
pub fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CliError::not_found(path));
    }
    Ok(())
}

/// Print markdown to stdout, or write it to `output`
pub fn emit(markdown: &str, output: Option<&Path>) -> Result<()> {
    match output {
        None => println!("{}", markdown),
        Some(path) => {
            fs::write(path, markdown)
                .map_err(|e| CliError::io("failed to write output file", e))?;
            println!(
                "{} {}",
                style("Documentation generated successfully:").green(),
                path.display()
            );
        }
    }
    Ok(())
}
