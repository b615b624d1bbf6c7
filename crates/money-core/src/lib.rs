//! # money-core
//!
//! Core types, error definitions, and process settings for the `money`
//! workspace.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace – amount type aliases, the error hierarchy, the `Settings`
//! singleton, and a few string utilities.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types.
pub mod errors;

/// Process-wide settings (display locale override).
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for major-unit (decimal) amounts.
pub type Real = f64;

/// Signed integer amount expressed in minor units (e.g. cents).
pub type MinorAmount = i64;

/// Number of decimal digits between the major and the minor unit.
pub type Exponent = u32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedDisplayLocale, Settings};
