//! XRD document renderer

use super::markdown::{Table, cell, cell_or_dash, indent};
use crate::xrd::{Field, Xrd, XrdVersion};

const REQUIRED_MARK: &str = "✅";
const OPTIONAL_MARK: &str = "❌";

/// Render the documentation page for one XRD version
///
/// `spec_rows` and `status_rows` are expected sorted and flattened. The
/// status section is left out when there are no status rows.
pub fn render_xrd(
    xrd: &Xrd,
    version: &XrdVersion,
    spec_rows: &[Field],
    status_rows: &[Field],
) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", xrd.names.kind));

    let description = version.description().trim();
    if !description.is_empty() {
        out.push_str(&format!("{}\n\n", description));
    }

    out.push_str(&format!("**API Group:** {}  \n", xrd.group));
    out.push_str(&format!("**API Version:** {}  \n", version.name));
    out.push_str(&format!("**Kind:** {}  \n", xrd.names.kind));
    if let Some(claim) = &xrd.claim_names {
        out.push_str(&format!("**Claim Kind:** {}  \n", claim.kind));
    }
    out.push('\n');

    out.push_str("## Spec Fields\n\n");
    out.push_str(&spec_table(spec_rows).render());
    out.push('\n');

    if !status_rows.is_empty() {
        out.push_str("## Status Fields\n\n");
        out.push_str(&status_table(status_rows).render());
        out.push('\n');
    }

    out.push_str("## Example\n\n");
    out.push_str("```yaml\n");
    out.push_str(&format!("apiVersion: {}/{}\n", xrd.group, version.name));
    out.push_str(&format!("kind: {}\n", xrd.example_kind()));
    out.push_str("metadata:\n  name: example\n");
    out.push_str("spec:\n  # Add your spec fields here\n");
    out.push_str("```\n");

    out
}

fn spec_table(rows: &[Field]) -> Table {
    let mut table = Table::new(&[
        "Name",
        "Type",
        "Description",
        "Required",
        "Default",
        "Constraints",
    ]);
    for field in rows {
        let default = if field.default.is_empty() {
            "-".to_string()
        } else {
            format!("`{}`", cell(&field.default))
        };
        let required = if field.required {
            REQUIRED_MARK
        } else {
            OPTIONAL_MARK
        };
        table.row(vec![
            name_cell(field),
            cell(&field.type_),
            cell(&field.description),
            required.to_string(),
            default,
            cell_or_dash(&field.constraints),
        ]);
    }
    table
}

fn status_table(rows: &[Field]) -> Table {
    let mut table = Table::new(&["Name", "Type", "Description"]);
    for field in rows {
        table.row(vec![
            name_cell(field),
            cell(&field.type_),
            cell(&field.description),
        ]);
    }
    table
}

fn name_cell(field: &Field) -> String {
    format!("{}{}", indent(field.level), cell(&field.name))
}
