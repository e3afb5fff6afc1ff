use crate::error::{ConversionError, Result};
use crate::models::Table;
use encoding_rs::WINDOWS_1252;
use std::borrow::Cow;
use std::path::Path;
use tracing::debug;

/// Delimiters tried during auto-detection, in tie-breaking priority order.
const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

pub struct TableReader;

impl TableReader {
    pub fn new() -> Self {
        Self
    }

    /// Load a CSV file into a [`Table`].
    ///
    /// Rejects non-`.csv` paths before touching the file. Decodes as UTF-8,
    /// falling back once to Windows-1252 for legacy municipal exports. The
    /// field delimiter is detected from the header line.
    pub fn read(&self, path: &Path) -> Result<Table> {
        let is_csv = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false);
        if !is_csv {
            return Err(ConversionError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }

        let bytes = std::fs::read(path)?;
        let text = decode(&bytes, path)?;
        if text.trim().is_empty() {
            return Err(ConversionError::EmptyTable);
        }

        let delimiter = detect_delimiter(&text);
        debug!("Detected delimiter {:?}", delimiter as char);

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(text.as_bytes());

        let columns: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();
        let mut table = Table::new(columns);

        for record in reader.records() {
            let record = record?;
            table.push_row(record.iter().map(|field| field.to_string()).collect());
        }

        debug!("Loaded {} rows from {}", table.len(), path.display());
        Ok(table)
    }
}

impl Default for TableReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode file content as UTF-8, retrying once with Windows-1252.
fn decode<'a>(bytes: &'a [u8], path: &Path) -> Result<Cow<'a, str>> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok(Cow::Borrowed(text)),
        Err(_) => {
            debug!("UTF-8 decode failed, retrying with Windows-1252");
            let (text, _, had_errors) = WINDOWS_1252.decode(bytes);
            if had_errors {
                return Err(ConversionError::Decode {
                    path: path.to_path_buf(),
                });
            }
            Ok(text)
        }
    }
}

/// Pick the most frequent candidate delimiter in the header line.
fn detect_delimiter(text: &str) -> u8 {
    let header = text.lines().next().unwrap_or("");
    let mut best = DELIMITER_CANDIDATES[0];
    let mut best_count = header.bytes().filter(|&b| b == best).count();
    for candidate in DELIMITER_CANDIDATES.into_iter().skip(1) {
        let count = header.bytes().filter(|&b| b == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}
