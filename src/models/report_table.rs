//! Labelled tables handed to export collaborators.

use serde::{Deserialize, Serialize};

/// A titled table of string cells.
///
/// `key` is a stable ASCII identifier (used for file names); `title` is the
/// display name shown to users.
///
/// # Example
///
/// ```
/// use annual_leave_engine::models::ReportTable;
///
/// let mut table = ReportTable::new("summary", "결과", &["구분", "값"]);
/// table.push_row(["근속개월".to_string(), "51".to_string()]);
/// assert_eq!(table.rows.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    /// Stable ASCII identifier.
    pub key: String,
    /// Display title.
    pub title: String,
    /// Column headers.
    pub columns: Vec<String>,
    /// Data rows, each with one cell per column.
    pub rows: Vec<Vec<String>>,
}

impl ReportTable {
    /// Creates an empty table with the given headers.
    pub fn new(key: impl Into<String>, title: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    pub fn push_row<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.rows.push(cells.into_iter().collect());
    }
}
