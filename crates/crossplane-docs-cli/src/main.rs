//! crossplane-docs CLI - terraform-docs style markdown for Crossplane resources

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod error;
mod exit_codes;
mod logging;
mod util;

#[derive(Parser)]
#[command(name = "crossplane-docs")]
#[command(author = "crossplane-docs Contributors")]
#[command(version)]
#[command(about = "Generate documentation for Crossplane resources")]
#[command(
    long_about = "crossplane-docs generates terraform-docs style markdown documentation \
for Crossplane XRDs and Compositions.\n\n\
OpenAPI schemas and resource definitions are turned into tables with field names, \
types, descriptions, defaults and validations."
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate documentation from an XRD file
    #[command(after_help = "Examples:
  crossplane-docs xrd xrd.yaml
  crossplane-docs xrd xrd.yaml -o README.md
  crossplane-docs xrd xrd.yaml --show-nested=false")]
    Xrd {
        /// CompositeResourceDefinition YAML file
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show nested object structures
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        show_nested: bool,
    },

    /// Generate documentation from a Composition file
    #[command(after_help = "Examples:
  crossplane-docs composition composition.yaml
  crossplane-docs composition composition.yaml -o COMPOSITION.md
  crossplane-docs composition composition.yaml --show-patches=false")]
    Composition {
        /// Composition YAML file
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show patch details and transformations
        #[arg(long, default_value_t = true, action = ArgAction::Set)]
        show_patches: bool,
    },
}

fn main() {
    // Setup miette for nice error display
    miette::set_panic_hook();

    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.debug) {
        eprintln!("warning: failed to initialize logging: {}", e);
    }

    let result = match cli.command {
        Commands::Xrd {
            file,
            output,
            show_nested,
        } => commands::xrd::run(&file, output.as_deref(), show_nested),

        Commands::Composition {
            file,
            output,
            show_patches,
        } => commands::composition::run(&file, output.as_deref(), show_patches),
    };

    if let Err(err) = result {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}
