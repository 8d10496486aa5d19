/// Data layer: loading and name-column detection.
///
/// Architecture:
/// ```text
///      .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse file → NameTable
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ NameTable │  headers, rows of Option<String>
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ classify │  non-numeric columns → name column candidates
///   └──────────┘
/// ```

pub mod classify;
pub mod loader;
pub mod model;
