//! # money-format
//!
//! Conversion between decimal and minor-unit amounts, and price formatting
//! over the currency registry.
//!
//! Every function here is pure and never fails on bad codes: unknown
//! currencies convert with two decimals and format with the raw integer and
//! the code as symbol.
//!
//! ```
//! use money_format::{format, format_with_interval, to_minor_units};
//!
//! let cents = to_minor_units(19.99, "USD");
//! assert_eq!(format(cents, "USD"), "$19.99");
//! assert_eq!(format_with_interval(cents, "USD", Some("year"), 1), "$19.99 per year");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Plain, symbol-prefixed and code-suffixed formatting.
pub mod formatters;

/// Recurring-price labels.
pub mod interval;

/// Locale-aware formatting.
pub mod localized;

/// HTML rendering and item resolution.
pub mod render;

/// Decimal ⇄ minor-unit conversion.
pub mod units;

pub use formatters::{format, format_plain, format_with_code};
pub use interval::{format_with_interval, interval_phrase, Interval};
pub use localized::{format_localized, resolve_locale};
pub use render::{render, render_item, PriceSource, RenderOptions, DEFAULT_CURRENCY};
pub use units::{
    exponent_or_default, from_minor_units, to_minor_units, try_to_minor_units, DEFAULT_EXPONENT,
};
