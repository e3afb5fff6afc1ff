use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rd-converter")]
#[command(about = "Convert RD (EPSG:28992) POINT() geometries to WGS84 lat/lon (CSV only)")]
#[command(version)]
pub struct Cli {
    #[arg(help = "Input CSV containing a geometry column with POINT(x y)")]
    pub input_csv: PathBuf,

    #[arg(
        short,
        long,
        help = "Output CSV path [default: <input-stem>_wgs84.csv]"
    )]
    pub output_csv: Option<PathBuf>,

    #[arg(short = 'c', long, default_value = "geometrie", help = "Name of the geometry column")]
    pub geom_column: String,

    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,
}
