//! Indented text rendering of the visible tree

use genealogy::{wrap_label, VisibleRow};

pub mod icons {
    pub const EXPANDED: &str = "▾";
    pub const FOLDED: &str = "▸";
    pub const LEAF: &str = "•";
}

/// Render one row; wrapped label lines are aligned under the first one
pub fn render_row(row: &VisibleRow, wrap_width: usize) -> String {
    let indent = "  ".repeat(row.depth);
    let icon = if row.is_folded() {
        icons::FOLDED
    } else if row.has_children {
        icons::EXPANDED
    } else {
        icons::LEAF
    };

    let mut lines = wrap_label(&row.name, wrap_width);
    if lines.is_empty() {
        lines.push(String::new());
    }

    let suffix = if row.is_folded() {
        format!(" [{}] (+{})", row.id, row.hidden)
    } else {
        format!(" [{}]", row.id)
    };

    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i == 0 {
            out.push_str(&format!("{indent}{icon} {line}"));
        } else {
            out.push('\n');
            out.push_str(&format!("{indent}  {line}"));
        }
    }
    out.push_str(&suffix);
    out
}

/// Render all rows, one node per block
pub fn render_rows(rows: &[VisibleRow], wrap_width: usize) -> String {
    rows.iter()
        .map(|row| render_row(row, wrap_width))
        .collect::<Vec<_>>()
        .join("\n")
}
