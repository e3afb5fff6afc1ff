use crate::error::Result;
use crate::models::Table;
use std::path::Path;
use tracing::debug;

/// Serializes a [`Table`] to comma-separated UTF-8 text.
pub struct CsvWriter;

impl CsvWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write the table with a header row and no index column.
    ///
    /// Returns the number of data rows written.
    pub fn write(&self, table: &Table, path: &Path) -> Result<usize> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(table.columns())?;
        for row in table.rows() {
            writer.write_record(row)?;
        }
        writer.flush()?;

        debug!("Wrote {} rows to {}", table.len(), path.display());
        Ok(table.len())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}
