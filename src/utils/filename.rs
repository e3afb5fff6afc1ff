use std::path::{Path, PathBuf};

/// Default output path: the input filename stem suffixed with `_wgs84`,
/// with a `.csv` extension, in the same directory as the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}_wgs84.csv", stem))
}
