//! Markdown building blocks shared by the document renderers

/// Marker repeated once per nesting level in the name column
pub const INDENT_MARKER: &str = "&nbsp;&nbsp;";

/// Glyph placed after the indentation of a nested field
pub const NESTED_GLYPH: &str = "↳ ";

/// Prefix for a field name at the given nesting level
pub fn indent(level: usize) -> String {
    if level == 0 {
        return String::new();
    }
    format!("{}{}", INDENT_MARKER.repeat(level), NESTED_GLYPH)
}

/// Make text safe for a single table cell
///
/// Pipes are escaped and line breaks collapse into spaces so that a
/// multi-line description stays in its row.
pub fn cell(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}

/// Text for a cell, or `-` when there is nothing to show
pub fn cell_or_dash(text: &str) -> String {
    if text.is_empty() {
        "-".to_string()
    } else {
        cell(text)
    }
}

/// A markdown table built row by row
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&'static str]) -> Self {
        Self {
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    /// Append a row; cells are taken as already formatted
    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the header, separator and rows, each line newline-terminated
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("| {} |\n", self.headers.join(" | ")));

        let separators: Vec<String> = self
            .headers
            .iter()
            .map(|h| "-".repeat(h.chars().count() + 2))
            .collect();
        out.push_str(&format!("|{}|\n", separators.join("|")));

        for row in &self.rows {
            out.push_str(&format!("| {} |\n", row.join(" | ")));
        }
        out
    }
}
