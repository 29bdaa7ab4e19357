use serde::Serialize;

/// A small sample table that the cheat-sheet commands operate on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceTable {
    name: &'static str,
    columns: Vec<&'static str>,
    rows: Vec<Vec<&'static str>>,
}

impl ReferenceTable {
    /// Creates a table. Each row holds one cell per column.
    #[must_use]
    pub const fn new(
        name: &'static str,
        columns: Vec<&'static str>,
        rows: Vec<Vec<&'static str>>,
    ) -> Self {
        Self {
            name,
            columns,
            rows,
        }
    }

    /// Returns the table name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the column headers in order.
    #[must_use]
    pub fn columns(&self) -> &[&'static str] {
        &self.columns
    }

    /// Returns the data rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Vec<&'static str>] {
        &self.rows
    }

    /// Computes the display width of each column, header included.
    #[must_use]
    pub fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(header.chars().count())
            })
            .collect()
    }
}
