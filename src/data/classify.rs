use super::model::NameTable;

// ---------------------------------------------------------------------------
// Name-column detection
// ---------------------------------------------------------------------------

/// Columns that can hold names, in table order.
///
/// A column qualifies when, after dropping missing cells, it is non-empty and
/// at least one value does not read as a number.
pub fn name_columns(table: &NameTable) -> Vec<String> {
    table
        .headers
        .iter()
        .filter(|header| {
            table
                .present_values(header)
                .map(|mut values| values.any(|v| !looks_numeric(v)))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Whether `value` reads as a floating-point number.
///
/// Lenient the way spreadsheet exports need: surrounding whitespace is
/// ignored and `_` is allowed between digits (`1_000`).
pub fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }
    if !trimmed.contains('_') {
        return trimmed.parse::<f64>().is_ok();
    }
    let bytes = trimmed.as_bytes();
    let separators_ok = bytes.iter().enumerate().all(|(i, &b)| {
        b != b'_'
            || (i > 0
                && i + 1 < bytes.len()
                && bytes[i - 1].is_ascii_digit()
                && bytes[i + 1].is_ascii_digit())
    });
    separators_ok && trimmed.replace('_', "").parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str], rows: &[&[Option<&str>]]) -> NameTable {
        NameTable::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|c| c.map(str::to_string)).collect())
                .collect(),
        )
    }

    #[test]
    fn numbers_are_recognised() {
        for v in ["3", "-2.5", " 7 ", "1e3", ".5", "inf", "-Infinity", "NaN", "1_000"] {
            assert!(looks_numeric(v), "{v:?} should be numeric");
        }
        for v in ["Ana", "", "  ", "12a", "1__0", "_1", "1_", "3,5"] {
            assert!(!looks_numeric(v), "{v:?} should not be numeric");
        }
    }

    #[test]
    fn keeps_only_columns_with_text() {
        let t = table(
            &["Id", "Name", "Score", "Team"],
            &[
                &[Some("1"), Some("Ana"), Some("9.5"), Some("7")],
                &[Some("2"), Some("Beto"), Some("8"), Some("Red")],
            ],
        );
        assert_eq!(name_columns(&t), vec!["Name", "Team"]);
    }

    #[test]
    fn empty_columns_are_skipped() {
        let t = table(&["Blank", "Name"], &[&[None, Some("Ana")], &[None, None]]);
        assert_eq!(name_columns(&t), vec!["Name"]);
    }

    #[test]
    fn missing_cells_do_not_count_as_text() {
        let t = table(&["Age"], &[&[Some("30")], &[None], &[Some("41")]]);
        assert!(name_columns(&t).is_empty());
    }
}
