//! Conversion between decimal (major-unit) amounts and integer minor units.
//!
//! Only the representation changes: 19.99 USD becomes 1999 cents of the same
//! currency.  Unknown codes are converted with [`DEFAULT_EXPONENT`].

use std::str::FromStr;

use money_core::errors::{Error, Result};
use money_core::{Exponent, MinorAmount, Real};
use money_currencies::lookup;
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Exponent applied to codes that are not in the registry.
pub const DEFAULT_EXPONENT: Exponent = 2;

/// Minor-unit exponent for `code`, or [`DEFAULT_EXPONENT`] when unknown.
pub fn exponent_or_default(code: &str) -> Exponent {
    lookup(code).map_or(DEFAULT_EXPONENT, |c| c.exponent)
}

/// Convert a decimal amount to minor units, rounding half away from zero.
///
/// Never fails: unknown codes use two decimals, and non-finite or
/// out-of-range amounts saturate to `i64::MIN` / `i64::MAX` (NaN gives 0).
/// Use [`try_to_minor_units`] to detect those cases.
///
/// ```
/// use money_format::to_minor_units;
/// assert_eq!(to_minor_units(19.99, "USD"), 1999);
/// assert_eq!(to_minor_units(9.999, "KWD"), 9999);
/// assert_eq!(to_minor_units(100.0, "JPY"), 100);
/// ```
pub fn to_minor_units(amount: Real, code: &str) -> MinorAmount {
    try_to_minor_units(amount, code).unwrap_or_else(|err| {
        tracing::debug!(%err, "saturating minor-unit conversion");
        let factor = 10_f64.powi(exponent_or_default(code) as i32);
        (amount * factor).round() as MinorAmount
    })
}

/// Convert a decimal amount to minor units, rounding half away from zero.
///
/// The amount is scaled on its shortest decimal representation, so
/// `1.005` becomes `101` cents rather than the `100` a binary
/// multiplication would give.
///
/// # Errors
/// [`Error::InvalidArgument`] for NaN or infinite amounts and
/// [`Error::Overflow`] when the result does not fit in a [`MinorAmount`].
pub fn try_to_minor_units(amount: Real, code: &str) -> Result<MinorAmount> {
    if !amount.is_finite() {
        return Err(Error::InvalidArgument(format!(
            "cannot convert non-finite amount {amount} to minor units"
        )));
    }
    let exponent = exponent_or_default(code);
    let factor = 10_i64.pow(exponent);

    // Decimal covers about 28 significant digits; anything it cannot hold
    // goes through f64 and overflows below anyway.
    let scaled = Decimal::from_str(&amount.to_string())
        .ok()
        .and_then(|d| d.checked_mul(Decimal::from(factor)))
        .map(|d| d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero));
    let minor = match scaled {
        Some(d) => d.to_i64(),
        None => (amount * factor as Real).round().to_i64(),
    };
    minor.ok_or_else(|| Error::Overflow {
        amount: amount.to_string(),
        code: code.to_ascii_uppercase(),
    })
}

/// Convert a minor-unit amount back to a decimal amount.
///
/// Zero-decimal currencies are returned as-is, without a division.
///
/// ```
/// use money_format::from_minor_units;
/// assert_eq!(from_minor_units(1999, "USD"), 19.99);
/// assert_eq!(from_minor_units(9999, "KWD"), 9.999);
/// ```
pub fn from_minor_units(minor: MinorAmount, code: &str) -> Real {
    match exponent_or_default(code) {
        0 => minor as Real,
        exponent => minor as Real / 10_f64.powi(exponent as i32),
    }
}
