//! Error types for the `money` workspace.
//!
//! Most operations in this workspace degrade to a documented fallback instead
//! of failing (unknown currency codes, unknown locales, unrecognised interval
//! names).  The variants below are returned only by the explicitly fallible
//! `try_*` / `require` style APIs.

use thiserror::Error;

/// The top-level error type used throughout the workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid argument (e.g. a non-finite amount).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The currency code is not in the registry.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A converted amount does not fit the target integer type.
    #[error("amount {amount} {code} overflows the minor-unit range")]
    Overflow {
        /// The decimal amount that was being converted.
        amount: String,
        /// The currency code used for the conversion.
        code: String,
    },

    /// The locale identifier is not known to the formatting facility.
    #[error("unsupported locale: {0}")]
    Locale(String),
}

/// Shorthand `Result` type used throughout the workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;
