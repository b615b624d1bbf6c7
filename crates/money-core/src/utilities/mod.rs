//! Miscellaneous string utilities.

/// Numeric-string detection.
pub mod data_parsers;

pub use data_parsers::parse_numeric;
