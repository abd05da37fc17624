//! Tabular export as CSV, one file per table.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use super::{export_error, write_atomically};
use crate::error::{EngineError, EngineResult};
use crate::models::ReportTable;

/// Serializes report tables to CSV.
///
/// Each table becomes one sheet: a header row with the column names followed
/// by the data rows. Output is UTF-8 with a byte-order mark so spreadsheet
/// applications pick up the Hangul labels correctly.
///
/// # Example
///
/// ```
/// use annual_leave_engine::export::CsvExporter;
/// use annual_leave_engine::models::ReportTable;
///
/// let mut table = ReportTable::new("summary", "결과", &["구분", "값"]);
/// table.push_row(["근속개월".to_string(), "12".to_string()]);
///
/// let bytes = CsvExporter::new().render_table(&table).unwrap();
/// let text = String::from_utf8(bytes).unwrap();
/// assert!(text.ends_with("구분,값\n근속개월,12\n"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CsvExporter {
    with_bom: bool,
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

impl CsvExporter {
    /// Creates an exporter that prefixes output with a UTF-8 byte-order mark.
    pub fn new() -> Self {
        Self { with_bom: true }
    }

    /// Creates an exporter that writes plain UTF-8 without a byte-order mark.
    pub fn without_bom() -> Self {
        Self { with_bom: false }
    }

    fn table_error(table: &ReportTable, err: impl std::fmt::Display) -> EngineError {
        EngineError::ExportError {
            target: format!("{}.csv", table.key),
            message: err.to_string(),
        }
    }

    fn write_bom<W: Write>(&self, table: &ReportTable, writer: &mut W) -> EngineResult<()> {
        if self.with_bom {
            writer
                .write_all(UTF8_BOM)
                .map_err(|e| Self::table_error(table, e))?;
        }
        Ok(())
    }

    fn write_records<W: Write>(table: &ReportTable, writer: W) -> EngineResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer
            .write_record(&table.columns)
            .map_err(|e| Self::table_error(table, e))?;
        for row in &table.rows {
            csv_writer
                .write_record(row)
                .map_err(|e| Self::table_error(table, e))?;
        }
        csv_writer.flush().map_err(|e| Self::table_error(table, e))
    }

    /// Writes one table as CSV to `writer`.
    pub fn write_table<W: Write>(&self, table: &ReportTable, mut writer: W) -> EngineResult<()> {
        self.write_bom(table, &mut writer)?;
        Self::write_records(table, writer)
    }

    /// Renders one table to CSV bytes.
    pub fn render_table(&self, table: &ReportTable) -> EngineResult<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write_table(table, &mut buffer)?;
        Ok(buffer)
    }

    /// Renders several tables into one CSV document.
    ///
    /// Each table keeps its own header row; tables are separated by a blank
    /// line and the byte-order mark, if any, is written once.
    ///
    /// ```
    /// use annual_leave_engine::export::CsvExporter;
    /// use annual_leave_engine::models::ReportTable;
    ///
    /// let mut summary = ReportTable::new("summary", "결과", &["구분", "값"]);
    /// summary.push_row(["근속개월".to_string(), "12".to_string()]);
    /// let fiscal = ReportTable::new("fiscal_years", "회계연도", &["연도", "연차"]);
    ///
    /// let bytes = CsvExporter::without_bom().render_tables(&[summary, fiscal]).unwrap();
    /// assert_eq!(String::from_utf8(bytes).unwrap(), "구분,값\n근속개월,12\n\n연도,연차\n");
    /// ```
    pub fn render_tables(&self, tables: &[ReportTable]) -> EngineResult<Vec<u8>> {
        let mut buffer = Vec::new();

        for (index, table) in tables.iter().enumerate() {
            if index == 0 {
                self.write_bom(table, &mut buffer)?;
            } else {
                buffer.push(b'\n');
            }
            Self::write_records(table, &mut buffer)?;
        }

        Ok(buffer)
    }

    /// Writes one `<key>.csv` per table into `dir`, creating it if needed.
    ///
    /// Every table is rendered before anything is written. Returns the paths
    /// written, in table order.
    pub fn export_to_dir(&self, tables: &[ReportTable], dir: &Path) -> EngineResult<Vec<PathBuf>> {
        let rendered = tables
            .iter()
            .map(|table| -> EngineResult<(PathBuf, Vec<u8>)> {
                Ok((dir.join(format!("{}.csv", table.key)), self.render_table(table)?))
            })
            .collect::<EngineResult<Vec<_>>>()?;

        fs::create_dir_all(dir).map_err(|e| export_error(dir, e))?;

        let mut written = Vec::with_capacity(rendered.len());
        for (path, bytes) in rendered {
            write_atomically(&path, &bytes)?;
            written.push(path);
        }

        info!(
            dir = %dir.display(),
            tables = written.len(),
            "Exported leave tables as CSV"
        );

        Ok(written)
    }
}
