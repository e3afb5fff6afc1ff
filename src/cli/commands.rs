use crate::cli::args::Cli;
use crate::error::Result;
use crate::processors::Converter;
use crate::utils::ProgressReporter;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    debug!(
        "Converting {} (geometry column '{}')",
        cli.input_csv.display(),
        cli.geom_column
    );

    let progress = ProgressReporter::new_spinner("Converting coordinates...", false);

    let converter = Converter::new(&cli.geom_column);
    let report = converter.convert(&cli.input_csv, cli.output_csv.as_deref())?;

    progress.finish_and_clear();

    if report.rows_skipped > 0 {
        println!(
            "Skipped {} rows without valid POINT(x y).",
            report.rows_skipped
        );
    }
    println!(
        "Done: {} rows -> {}",
        report.rows_written,
        report.output_path.display()
    );

    Ok(())
}
