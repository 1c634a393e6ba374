//! Plain-text table rendering for debug output.

/// The rows handed to [`format_table`] did not share a column count.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// Row `row` has `found` cells where the first row has `expected`.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Render rows of cells as aligned columns.
///
/// Each column is as wide as its widest cell (measured in `char`s);
/// every cell, the last column included, is left-aligned and padded to
/// that width with a single space between columns. Rows are joined with
/// `\n` and there is no trailing newline. The column count is taken
/// from the first row; a row with a different arity is an error. Empty
/// input renders as the empty string.
pub fn format_table(rows: &[Vec<String>]) -> Result<String, TableError> {
    let Some(first) = rows.first() else {
        return Ok(String::new());
    };
    let columns = first.len();

    let mut widths = vec![0usize; columns];
    for (i, row) in rows.iter().enumerate() {
        if row.len() != columns {
            return Err(TableError::RaggedRow {
                row: i,
                expected: columns,
                found: row.len(),
            });
        }
        for (cell, width) in row.iter().zip(widths.iter_mut()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let lines: Vec<String> = rows
        .iter()
        .map(|row| {
            row.iter()
                .zip(&widths)
                .map(|(cell, width)| {
                    let pad = width - cell.chars().count();
                    format!("{}{}", cell, " ".repeat(pad))
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    Ok(lines.join("\n"))
}
