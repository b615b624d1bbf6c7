//! `CurrencyConfig` — display and minor-unit metadata for one currency.

use money_core::{Exponent, MinorAmount};

/// Data describing a single currency.
///
/// The `exponent` is the value payment APIs expect, which for a handful of
/// currencies differs from the ISO 4217 minor unit (see the notes on
/// [`ISK`](crate::currencies::ISK), [`HUF`](crate::currencies::HUF),
/// [`TWD`](crate::currencies::TWD) and [`UGX`](crate::currencies::UGX)).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CurrencyConfig {
    /// ISO 4217 alphabetic code, upper case (e.g. "USD").
    pub code: &'static str,
    /// Display name (e.g. "United States Dollar").
    pub name: &'static str,
    /// Symbol used in front of amounts (e.g. "$").  Not unique across codes.
    pub symbol: &'static str,
    /// Number of decimal digits between the major and the minor unit.
    /// Always 0, 2 or 3.
    pub exponent: Exponent,
    /// Default locale for localized formatting (e.g. "en_US").
    pub locale: &'static str,
}

impl CurrencyConfig {
    /// Number of minor units in one major unit (`10^exponent`).
    pub fn minor_units_per_major(&self) -> MinorAmount {
        10_i64.pow(self.exponent)
    }

    /// `true` when the major unit is the minor unit (e.g. JPY).
    pub fn is_zero_decimal(&self) -> bool {
        self.exponent == 0
    }

    /// `true` for three-decimal currencies (e.g. KWD).
    pub fn is_three_decimal(&self) -> bool {
        self.exponent == 3
    }
}

impl std::fmt::Display for CurrencyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use crate::currencies::{JPY, KWD, USD};

    #[test]
    fn minor_units_per_major() {
        assert_eq!(USD.minor_units_per_major(), 100);
        assert_eq!(JPY.minor_units_per_major(), 1);
        assert_eq!(KWD.minor_units_per_major(), 1000);
    }

    #[test]
    fn decimal_classes() {
        assert!(JPY.is_zero_decimal());
        assert!(!USD.is_zero_decimal());
        assert!(KWD.is_three_decimal());
        assert!(!USD.is_three_decimal());
    }

    #[test]
    fn display_is_code() {
        assert_eq!(format!("{}", &USD), "USD");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_all_fields() {
        let v = serde_json::to_value(&KWD).unwrap();
        assert_eq!(v["code"], "KWD");
        assert_eq!(v["symbol"], "KD");
        assert_eq!(v["exponent"], 3);
        assert_eq!(v["locale"], "ar_KW");
    }
}
