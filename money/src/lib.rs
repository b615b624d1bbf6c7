//! # money
//!
//! A fixed registry of world currencies with minor-unit conversion and
//! price formatting on top.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `money-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! money = "0.1"
//! ```
//!
//! ```rust
//! use money::{format, format_with_code, is_zero_decimal, to_minor_units};
//!
//! let cents = to_minor_units(19.99, "usd");
//! assert_eq!(cents, 1999);
//! assert_eq!(format(cents, "USD"), "$19.99");
//! assert_eq!(format_with_code(cents, "USD"), "19.99 USD");
//! assert!(is_zero_decimal("JPY"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and settings.
pub use money_core as core;

/// Currency configuration records and the registry.
pub use money_currencies as currencies;

/// Conversion and formatting functions.
pub use money_format as formatting;

pub use money_core::{Error, MinorAmount, Result, ScopedDisplayLocale, Settings};
pub use money_currencies::{
    codes, default_locale, exponent, is_supported, is_three_decimal, is_zero_decimal, list_all,
    lookup, name, require, symbol, CurrencyConfig,
};
pub use money_format::{
    format, format_localized, format_plain, format_with_code, format_with_interval,
    from_minor_units, render, render_item, to_minor_units, try_to_minor_units, Interval,
    PriceSource, RenderOptions,
};
