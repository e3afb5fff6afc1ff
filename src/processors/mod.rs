pub mod converter;

pub use converter::{ConversionReport, Converter};
