//! The currency registry: case-insensitive lookup over the static table.
//!
//! The table itself lives in [`crate::currencies`]; this module indexes it
//! once, on first use, and exposes the lookup functions and the global
//! per-field wrappers built on top of them.

use std::collections::HashMap;
use std::sync::LazyLock;

use money_core::errors::{Error, Result};
use money_core::Exponent;

use crate::currencies::*;
use crate::currency::CurrencyConfig;

/// Every supported currency, sorted by code.
static ALL_CURRENCIES: [&CurrencyConfig; 139] = [
    &AED, &AFN, &ALL, &AMD, &ANG, &AOA, &ARS, &AUD, &AWG, &AZN, &BAM, &BBD, &BDT, &BGN, &BHD,
    &BIF, &BMD, &BND, &BOB, &BRL, &BSD, &BWP, &BYN, &BZD, &CAD, &CDF, &CHF, &CLP, &CNY, &COP,
    &CRC, &CVE, &CZK, &DJF, &DKK, &DOP, &DZD, &EGP, &ETB, &EUR, &FJD, &FKP, &GBP, &GEL, &GIP,
    &GMD, &GNF, &GTQ, &GYD, &HKD, &HNL, &HTG, &HUF, &IDR, &ILS, &INR, &ISK, &JMD, &JOD, &JPY,
    &KES, &KGS, &KHR, &KMF, &KRW, &KWD, &KYD, &KZT, &LAK, &LBP, &LKR, &LRD, &LSL, &MAD, &MDL,
    &MGA, &MKD, &MMK, &MNT, &MOP, &MUR, &MVR, &MWK, &MXN, &MYR, &MZN, &NAD, &NGN, &NIO, &NOK,
    &NPR, &NZD, &OMR, &PAB, &PEN, &PGK, &PHP, &PKR, &PLN, &PYG, &QAR, &RON, &RSD, &RUB, &RWF,
    &SAR, &SBD, &SCR, &SEK, &SGD, &SHP, &SLE, &SOS, &SRD, &STD, &SZL, &THB, &TJS, &TND, &TOP,
    &TRY, &TTD, &TWD, &TZS, &UAH, &UGX, &USD, &UYU, &UZS, &VND, &VUV, &WST, &XAF, &XCD, &XOF,
    &XPF, &YER, &ZAR, &ZMW,
];

static INDEX: LazyLock<HashMap<&'static str, &'static CurrencyConfig>> =
    LazyLock::new(|| ALL_CURRENCIES.iter().map(|c| (c.code, *c)).collect());

/// Look up a currency by code, ignoring ASCII case.
///
/// Returns `None` for codes that are not in the registry.
pub fn lookup(code: &str) -> Option<&'static CurrencyConfig> {
    let found = INDEX.get(code.to_ascii_uppercase().as_str()).copied();
    if found.is_none() {
        tracing::trace!(code, "currency code not in registry");
    }
    found
}

/// Like [`lookup`], but an unknown code is an [`Error::UnknownCurrency`].
pub fn require(code: &str) -> Result<&'static CurrencyConfig> {
    lookup(code).ok_or_else(|| Error::UnknownCurrency(code.to_ascii_uppercase()))
}

/// All supported currencies, sorted by code.
///
/// The order is stable, which makes it suitable for display; nothing else
/// depends on it.
pub fn list_all() -> &'static [&'static CurrencyConfig] {
    &ALL_CURRENCIES
}

/// Codes of all supported currencies, sorted.
pub fn codes() -> impl Iterator<Item = &'static str> {
    ALL_CURRENCIES.iter().map(|c| c.code)
}

// ── Global wrappers ──────────────────────────────────────────────────────────

/// `true` if `code` is in the registry.
pub fn is_supported(code: &str) -> bool {
    lookup(code).is_some()
}

/// Display symbol for `code`.
pub fn symbol(code: &str) -> Option<&'static str> {
    lookup(code).map(|c| c.symbol)
}

/// Display name for `code`.
pub fn name(code: &str) -> Option<&'static str> {
    lookup(code).map(|c| c.name)
}

/// Default locale for `code`.
pub fn default_locale(code: &str) -> Option<&'static str> {
    lookup(code).map(|c| c.locale)
}

/// Minor-unit exponent for `code`.
pub fn exponent(code: &str) -> Option<Exponent> {
    lookup(code).map(|c| c.exponent)
}

/// `true` for zero-decimal currencies; `false` for unknown codes.
pub fn is_zero_decimal(code: &str) -> bool {
    lookup(code).is_some_and(CurrencyConfig::is_zero_decimal)
}

/// `true` for three-decimal currencies; `false` for unknown codes.
pub fn is_three_decimal(code: &str) -> bool {
    lookup(code).is_some_and(CurrencyConfig::is_three_decimal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("usd"), Some(&USD));
        assert_eq!(lookup("Usd"), lookup("USD"));
        assert_eq!(symbol("usd"), symbol("USD"));
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(lookup("ZZZ"), None);
        assert_eq!(lookup(""), None);
        assert_eq!(symbol("ZZZ"), None);
        assert!(!is_supported("ZZZ"));
        assert!(!is_zero_decimal("ZZZ"));
        assert!(!is_three_decimal("ZZZ"));
        assert_eq!(require("zzz"), Err(Error::UnknownCurrency("ZZZ".into())));
    }

    #[test]
    fn wrappers() {
        assert!(is_zero_decimal("JPY"));
        assert!(!is_zero_decimal("USD"));
        assert!(is_three_decimal("kwd"));
        assert_eq!(name("EUR"), Some("Euro"));
        assert_eq!(default_locale("JPY"), Some("ja_JP"));
        assert_eq!(exponent("KWD"), Some(3));
        assert_eq!(require("gbp").map(|c| c.symbol), Ok("£"));
    }

    #[test]
    fn table_is_sorted_and_unique() {
        let all = list_all();
        assert!(all.windows(2).all(|w| w[0].code < w[1].code));
        let unique: HashSet<_> = codes().collect();
        assert_eq!(unique.len(), all.len());
        assert_eq!(INDEX.len(), all.len());
    }

    #[test]
    fn entries_are_well_formed() {
        for c in list_all() {
            assert_eq!(c.code.len(), 3, "bad code {}", c.code);
            assert!(c.code.chars().all(|ch| ch.is_ascii_uppercase()), "{}", c.code);
            assert!(matches!(c.exponent, 0 | 2 | 3), "{} exponent {}", c.code, c.exponent);
            assert!(!c.name.is_empty() && !c.symbol.is_empty(), "{}", c.code);
            assert_eq!(c.locale.len(), 5, "{} locale {}", c.code, c.locale);
            assert_eq!(lookup(c.code), Some(*c));
        }
    }

    #[test]
    fn zero_decimal_set() {
        let zero: Vec<_> = list_all()
            .iter()
            .filter(|c| c.is_zero_decimal())
            .map(|c| c.code)
            .collect();
        assert_eq!(
            zero,
            [
                "BIF", "CLP", "DJF", "GNF", "JPY", "KMF", "KRW", "MGA", "PYG", "RWF", "VND",
                "VUV", "XAF", "XOF", "XPF"
            ]
        );
    }
}
