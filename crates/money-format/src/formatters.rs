//! Plain, symbol-prefixed and code-suffixed price strings.
//!
//! These formatters use a fixed ASCII convention regardless of the
//! currency's locale: `,` groups thousands and `.` separates the minor
//! digits.  Locale-aware output lives in [`crate::localized`].

use money_core::{Exponent, MinorAmount};
use money_currencies::lookup;
use num_format::{Locale, ToFormattedString};

/// Render an absolute minor-unit amount as a grouped numeral with exactly
/// `exponent` fraction digits, using `locale`'s separators.
pub(crate) fn numeral(abs: u64, exponent: Exponent, locale: &Locale) -> String {
    let unit = 10_u64.pow(exponent);
    let whole = (abs / unit).to_formatted_string(locale);
    if exponent == 0 {
        return whole;
    }
    format!(
        "{whole}{}{:0width$}",
        locale.decimal(),
        abs % unit,
        width = exponent as usize
    )
}

/// Format a minor-unit amount without any currency marker.
///
/// Unknown codes fall back to the raw integer, ungrouped.
///
/// ```
/// use money_format::format_plain;
/// assert_eq!(format_plain(123_456_789, "USD"), "1,234,567.89");
/// assert_eq!(format_plain(9999, "JPY"), "9,999");
/// assert_eq!(format_plain(1000, "ZZZ"), "1000");
/// ```
pub fn format_plain(minor: MinorAmount, code: &str) -> String {
    let Some(currency) = lookup(code) else {
        tracing::debug!(code, "unknown currency, formatting raw amount");
        return minor.to_string();
    };
    let digits = numeral(minor.unsigned_abs(), currency.exponent, &Locale::en);
    if minor < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Format a minor-unit amount with the currency symbol in front.
///
/// The sign goes before the symbol (`-$5.00`).  Unknown codes use the
/// upper-cased code as the symbol and the raw integer as the numeral.
///
/// ```
/// use money_format::format;
/// assert_eq!(format(9999, "USD"), "$99.99");
/// assert_eq!(format(-500, "usd"), "-$5.00");
/// assert_eq!(format(1000, "zzz"), "ZZZ1000");
/// ```
pub fn format(minor: MinorAmount, code: &str) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    match lookup(code) {
        Some(currency) => format!(
            "{sign}{}{}",
            currency.symbol,
            numeral(minor.unsigned_abs(), currency.exponent, &Locale::en)
        ),
        None => {
            tracing::debug!(code, "unknown currency, using the code as symbol");
            format!(
                "{sign}{}{}",
                code.to_ascii_uppercase(),
                minor.unsigned_abs()
            )
        }
    }
}

/// Format a minor-unit amount followed by a space and the upper-cased code.
///
/// ```
/// use money_format::format_with_code;
/// assert_eq!(format_with_code(9999, "usd"), "99.99 USD");
/// ```
pub fn format_with_code(minor: MinorAmount, code: &str) -> String {
    format!("{} {}", format_plain(minor, code), code.to_ascii_uppercase())
}
