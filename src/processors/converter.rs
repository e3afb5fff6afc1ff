use crate::error::{ConversionError, Result};
use crate::geometry::PointParser;
use crate::readers::TableReader;
use crate::reproject::Reprojector;
use crate::utils::default_output_path;
use crate::writers::CsvWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Outcome of one conversion run.
#[derive(Debug)]
pub struct ConversionReport {
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub rows_written: usize,
    pub output_path: PathBuf,
}

/// Sequential load → parse → reproject → write pipeline.
pub struct Converter {
    geom_column: String,
}

impl Converter {
    pub fn new(geom_column: impl Into<String>) -> Self {
        Self {
            geom_column: geom_column.into(),
        }
    }

    /// Run the full pipeline for one input file.
    ///
    /// Rows whose geometry field does not parse are dropped; their count is
    /// returned in the report. Fatal conditions (bad extension, decode
    /// failure, missing column) propagate without producing any output file.
    pub fn convert(&self, input: &Path, output: Option<&Path>) -> Result<ConversionReport> {
        let mut table = TableReader::new().read(input)?;
        let rows_read = table.len();

        let geom_idx = table.column_index(&self.geom_column).ok_or_else(|| {
            ConversionError::MissingColumn {
                column: self.geom_column.clone(),
                available: table.columns().to_vec(),
            }
        })?;

        // Parse every geometry cell before mutating the table so the keep
        // flags stay aligned with the original row order.
        let parser = PointParser::new();
        let parsed: Vec<Option<(f64, f64)>> = table
            .rows()
            .iter()
            .map(|row| parser.parse(&row[geom_idx]))
            .collect();

        let keep: Vec<bool> = parsed.iter().map(Option::is_some).collect();
        table.retain_rows(&keep);

        let (x_rd, y_rd): (Vec<f64>, Vec<f64>) = parsed.into_iter().flatten().unzip();
        let rows_skipped = rows_read - x_rd.len();
        debug!(
            "Parsed {} of {} geometry values",
            x_rd.len(),
            rows_read
        );

        let reprojector = Reprojector::rd_to_wgs84()?;
        let (longitude, latitude) = reprojector.transform_points(&x_rd, &y_rd)?;

        table.push_column("x_rd", x_rd.iter().map(f64::to_string).collect());
        table.push_column("y_rd", y_rd.iter().map(f64::to_string).collect());
        table.push_column("longitude", longitude.iter().map(f64::to_string).collect());
        table.push_column("latitude", latitude.iter().map(f64::to_string).collect());

        let output_path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input));
        let rows_written = CsvWriter::new().write(&table, &output_path)?;

        Ok(ConversionReport {
            rows_read,
            rows_skipped,
            rows_written,
            output_path,
        })
    }
}
