pub mod filename;
pub mod progress;

pub use filename::default_output_path;
pub use progress::ProgressReporter;
