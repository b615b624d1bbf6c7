//! # money-currencies
//!
//! The currency registry: a fixed table of supported currencies and
//! case-insensitive lookups over it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Per-currency configuration record.
pub mod currency;

/// Pre-defined world currencies.
pub mod currencies;

/// Lookup functions and global per-field wrappers.
pub mod registry;

pub use currency::CurrencyConfig;
pub use registry::{
    codes, default_locale, exponent, is_supported, is_three_decimal, is_zero_decimal, list_all,
    lookup, name, require, symbol,
};
