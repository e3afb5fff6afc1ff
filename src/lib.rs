pub mod cli;
pub mod error;
pub mod geometry;
pub mod models;
pub mod processors;
pub mod readers;
pub mod reproject;
pub mod utils;
pub mod writers;

pub use error::{ConversionError, Result};
