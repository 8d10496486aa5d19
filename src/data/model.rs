// ---------------------------------------------------------------------------
// NameTable – the loaded CSV
// ---------------------------------------------------------------------------

/// A CSV file held in memory: one header per column, one `Vec` per row.
///
/// Every row has exactly `headers.len()` cells. A `None` cell is a missing
/// value (empty field or one of the NA tokens recognised by the loader).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameTable {
    /// Column names in file order, already de-duplicated.
    pub headers: Vec<String>,
    /// Row-major cells.
    pub rows: Vec<Vec<Option<String>>>,
}

impl NameTable {
    /// Build a table, padding short rows with missing cells.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        NameTable { headers, rows }
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Non-missing values of a column, in row order.
    ///
    /// Returns `None` when the column does not exist.
    pub fn present_values<'a>(&'a self, name: &str) -> Option<impl Iterator<Item = &'a str>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .filter_map(move |row| row.get(idx).and_then(|cell| cell.as_deref())),
        )
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
