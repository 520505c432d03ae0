//! Composition document renderer

use super::markdown::{Table, cell, cell_or_dash};
use crate::composition::{Composition, ManagedResource};

/// Name shown when the composition has no metadata.name
pub const UNKNOWN_NAME: &str = "unknown";

/// Render the documentation page for a composition
///
/// `resources` are rendered in the given order. With `show_patches` every
/// resource gets a field mapping subsection.
pub fn render_composition(
    comp: &Composition,
    resources: &[ManagedResource],
    show_patches: bool,
) -> String {
    let type_ref = &comp.composite_type_ref;
    let mut out = String::new();

    out.push_str(&format!("# {} Composition\n\n", type_ref.kind));
    out.push_str(&format!(
        "**Composition Name:** {}  \n",
        comp.name.as_deref().unwrap_or(UNKNOWN_NAME)
    ));
    out.push_str(&format!(
        "**Composite Type:** {}/{}  \n",
        type_ref.api_version, type_ref.kind
    ));
    if let Some(mode) = &comp.mode {
        out.push_str(&format!("**Mode:** {}\n", mode));
    }
    out.push('\n');

    out.push_str("## Managed Resources\n\n");
    out.push_str(&format!(
        "This composition creates {} managed resource(s):\n\n",
        resources.len()
    ));

    let mut table = Table::new(&["Resource Name", "Kind", "API Version"]);
    for resource in resources {
        table.row(vec![
            cell(&resource.name),
            cell(&resource.kind),
            cell(&resource.api_version),
        ]);
    }
    out.push_str(&table.render());

    if show_patches {
        out.push_str("\n## Field Mappings\n");
        for resource in resources {
            out.push_str(&format!("\n### {} ({})\n\n", resource.name, resource.kind));
            out.push_str(&mappings(resource));
        }
    }

    out
}

fn mappings(resource: &ManagedResource) -> String {
    if resource.patches.is_empty() {
        return "No patches defined.\n".to_string();
    }

    let mut table = Table::new(&["XRD Field", "Mapped To", "Transformation"]);
    for patch in &resource.patches {
        table.row(vec![
            cell_or_dash(&patch.source_field),
            cell(&patch.target_field),
            cell(&patch.transformation),
        ]);
    }
    table.render()
}
