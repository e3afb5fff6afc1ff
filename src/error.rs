use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConversionError>;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error(
        "Only CSV supported. Convert '{}' to .csv (Excel: Save As -> CSV UTF-8) and retry.",
        path.display()
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("Could not decode '{}' as UTF-8 or Windows-1252", path.display())]
    Decode { path: PathBuf },

    #[error("Column '{column}' not found. Available: {}", available.join(", "))]
    MissingColumn {
        column: String,
        available: Vec<String>,
    },

    #[error("Input file has no header row")]
    EmptyTable,

    #[error("Projection setup error: {0}")]
    ProjectionSetup(String),

    #[error("Coordinate transformation error: {0}")]
    Transform(String),
}
