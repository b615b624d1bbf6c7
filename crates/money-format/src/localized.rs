//! Locale-aware price formatting.
//!
//! Separators and grouping come from the CLDR locale data shipped with
//! `num-format`.  An unknown currency or locale falls back to
//! [`crate::format`], so callers always get a price string.

use money_core::errors::{Error, Result};
use money_core::{MinorAmount, Settings};
use money_currencies::{lookup, CurrencyConfig};
use num_format::Locale;

use crate::formatters::{format, numeral};

/// Resolve a locale identifier such as `"de_DE"`, `"pt-BR"` or `"ja"`.
///
/// The full tag is tried first, then its language subtag alone.
///
/// # Errors
/// [`Error::Locale`] when neither form is known.
pub fn resolve_locale(name: &str) -> Result<Locale> {
    let tag = name.trim().replace('_', "-");
    let language = tag.split('-').next().unwrap_or_default();
    Locale::from_name(&tag)
        .or_else(|_| Locale::from_name(language))
        .map_err(|_| Error::Locale(name.to_owned()))
}

/// Format a minor-unit amount using locale-specific separators.
///
/// The locale is `locale` when given, otherwise the process display locale
/// ([`Settings::display_locale`]), otherwise the currency's own default
/// locale.  The symbol is placed in front of the numeral as in
/// [`crate::format`].
///
/// Major and minor digits are split from the integer amount, so the output
/// is exact across the whole `i64` range.
///
/// ```
/// use money_format::format_localized;
/// assert_eq!(format_localized(123_456, "EUR", Some("de_DE")), "€1.234,56");
/// assert_eq!(format_localized(123_456, "USD", Some("xx_XX")), "$1,234.56");
/// ```
pub fn format_localized(minor: MinorAmount, code: &str, locale: Option<&str>) -> String {
    let Some(currency) = lookup(code) else {
        return format(minor, code);
    };
    let locale_name = match locale {
        Some(name) => name.to_owned(),
        None => Settings::instance()
            .display_locale()
            .unwrap_or_else(|| currency.locale.to_owned()),
    };
    localize(minor, currency, &locale_name).unwrap_or_else(|err| {
        tracing::debug!(%err, code = currency.code, "falling back to non-localized format");
        format(minor, code)
    })
}

fn localize(minor: MinorAmount, currency: &CurrencyConfig, locale_name: &str) -> Result<String> {
    let locale = resolve_locale(locale_name)?;
    let sign = if minor < 0 { locale.minus_sign() } else { "" };
    Ok(format!(
        "{sign}{}{}",
        currency.symbol,
        numeral(minor.unsigned_abs(), currency.exponent, &locale)
    ))
}
