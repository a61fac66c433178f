//! Markdown pipe-table rendering.

use crate::load::Table;

/// Escape one cell for use inside a pipe-table row.
///
/// Pipes get a backslash prefix, CR/LF become spaces, and any whitespace run
/// collapses to a single space with the ends trimmed.
pub fn escape_cell(raw: &str) -> String {
    let escaped = raw.replace('|', "\\|").replace(['\r', '\n'], " ");
    escaped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Render `table` as a Markdown pipe-table.
///
/// The first row is the header; every data row is padded with empty fields
/// or truncated to the header's width before escaping. An empty table
/// renders as an empty string; a header-only table renders header and
/// separator lines. Lines are joined with `\n` and no trailing newline is
/// appended.
pub fn to_markdown(table: &Table) -> String {
    let Some(header) = table.header() else {
        return String::new();
    };
    let width = header.len();

    let mut lines = Vec::with_capacity(table.row_count() + 1);
    lines.push(render_line(header.iter().map(|cell| escape_cell(cell))));
    lines.push(render_line(
        std::iter::repeat_with(|| "---".to_string()).take(width),
    ));
    for row in &table.rows[1..] {
        lines.push(render_line(
            row.iter()
                .map(String::as_str)
                .chain(std::iter::repeat(""))
                .take(width)
                .map(escape_cell),
        ));
    }
    lines.join("\n")
}

fn render_line(cells: impl Iterator<Item = String>) -> String {
    format!("| {} |", cells.collect::<Vec<_>>().join(" | "))
}
