use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::NameTable;

/// Cell contents read as a missing value, matching the default NA tokens of
/// the pandas CSV reader that most name lists are exported from.
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a CSV file with a header row into a [`NameTable`].
///
/// * Header cells are trimmed; a leading BOM is dropped.
/// * Empty headers become `Unnamed: <i>`, repeated ones `<name>.1`, `<name>.2`…
/// * Short rows are padded with missing cells, long rows are rejected.
pub fn load_csv(path: &Path) -> Result<NameTable> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let raw_headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();
    if raw_headers.is_empty() {
        bail!("{} has no header row", path.display());
    }
    let headers = dedupe_headers(&raw_headers);

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        if record.len() > headers.len() {
            bail!(
                "CSV row {}: expected {} fields, found {}",
                row_no + 1,
                headers.len(),
                record.len()
            );
        }
        rows.push(record.iter().map(parse_cell).collect());
    }

    Ok(NameTable::new(headers, rows))
}

fn parse_cell(s: &str) -> Option<String> {
    if NA_TOKENS.contains(&s) {
        None
    } else {
        Some(s.to_string())
    }
}

fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

/// Rename repeated headers to `<name>.<n>`, skipping any name already taken
/// (`A,A,A.1` becomes `A,A.1,A.1.1`).
fn dedupe_headers(raw: &[String]) -> Vec<String> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    raw.iter()
        .enumerate()
        .map(|(i, h)| {
            let mut base = normalize_header(h);
            if base.is_empty() {
                base = format!("Unnamed: {i}");
            }
            let mut name = base.clone();
            let mut count = counts.get(&name).copied().unwrap_or(0);
            while count > 0 {
                counts.insert(base.clone(), count + 1);
                name = format!("{base}.{count}");
                count = counts.get(&name).copied().unwrap_or(0);
            }
            counts.insert(name.clone(), count + 1);
            name
        })
        .collect()
}
