//! End-to-end checks of the conversion and formatting functions against the
//! currency registry.

use approx::assert_abs_diff_eq;
use money_currencies::{is_zero_decimal, list_all, lookup, symbol};
use money_format::{
    format, format_localized, format_plain, format_with_code, format_with_interval,
    from_minor_units, render, resolve_locale, to_minor_units,
};

// ─── Conversion ───────────────────────────────────────────────────────────────

#[test]
fn to_minor_units_examples() {
    assert_eq!(to_minor_units(19.99, "USD"), 1999);
    assert_eq!(to_minor_units(9.999, "KWD"), 9999);
    assert_eq!(to_minor_units(100.0, "JPY"), 100);
}

#[test]
fn from_minor_units_examples() {
    assert_abs_diff_eq!(from_minor_units(1999, "USD"), 19.99, epsilon = 1e-12);
    assert_abs_diff_eq!(from_minor_units(9999, "KWD"), 9.999, epsilon = 1e-12);
    assert_abs_diff_eq!(from_minor_units(100, "JPY"), 100.0, epsilon = 0.0);
}

#[test]
fn every_currency_round_trips_small_amounts() {
    for c in list_all() {
        for minor in [0, 1, -1, 99, 1_234, -987_654, 100_000_000] {
            let major = from_minor_units(minor, c.code);
            assert_eq!(to_minor_units(major, c.code), minor, "{} {minor}", c.code);
        }
    }
}

// ─── Formatting ───────────────────────────────────────────────────────────────

#[test]
fn format_examples() {
    assert_eq!(format(9999, "USD"), "$99.99");
    assert_eq!(format(9999, "JPY"), "¥9,999");
    assert_eq!(format(9999, "KWD"), "KD9.999");
    assert_eq!(format_plain(9999, "USD"), "99.99");
    assert_eq!(format_with_code(9999, "USD"), "99.99 USD");
}

#[test]
fn unsupported_code_never_fails() {
    assert_eq!(format(1000, "ZZZ"), "ZZZ1000");
    assert_eq!(format_plain(1000, "ZZZ"), "1000");
    assert_eq!(format_with_code(1000, "ZZZ"), "1000 ZZZ");
    assert_eq!(format_localized(1000, "ZZZ", None), "ZZZ1000");
    assert_eq!(format_with_interval(1000, "ZZZ", Some("day"), 1), "ZZZ1000 per day");
}

#[test]
fn every_currency_formats_with_its_symbol() {
    for c in list_all() {
        let out = format(123_456, c.code);
        assert!(out.starts_with(c.symbol), "{} -> {out}", c.code);
        let digits = out.trim_start_matches(c.symbol);
        let fraction = digits.rsplit_once('.').map_or(0, |(_, f)| f.len());
        assert_eq!(fraction as u32, c.exponent, "{} -> {out}", c.code);
    }
}

#[test]
fn interval_examples() {
    assert_eq!(
        format_with_interval(9999, "USD", Some("month"), 1),
        "$99.99 per month"
    );
    assert_eq!(
        format_with_interval(9999, "USD", Some("month"), 3),
        "$99.99 every 3 months"
    );
    assert_eq!(
        format_with_interval(9999, "USD", Some("day"), 7),
        "$99.99 every 7 days"
    );
}

#[test]
fn every_default_locale_resolves() {
    for c in list_all() {
        assert!(
            resolve_locale(c.locale).is_ok(),
            "{} default locale {} is not resolvable",
            c.code,
            c.locale
        );
    }
}

#[test]
fn default_locales_of_island_currencies() {
    assert_eq!(format_localized(123_456, "MVR", None), "Rf1,234.56");
    assert_eq!(format_localized(123_456, "VUV", None), "VT123,456");
    assert_eq!(format_localized(123_456, "WST", None), "WS$1,234.56");
}

// ─── Registry wrappers ────────────────────────────────────────────────────────

#[test]
fn zero_decimal_and_case_insensitivity() {
    assert!(is_zero_decimal("JPY"));
    assert!(!is_zero_decimal("USD"));
    assert!(!is_zero_decimal("ZZZ"));
    assert_eq!(symbol("usd"), symbol("USD"));
    assert_eq!(lookup("jPy").map(|c| c.code), Some("JPY"));
}

#[test]
fn render_rejects_non_numeric() {
    assert_eq!(render("not-a-number", "USD", None, 1), None);
    assert!(render("42", "USD", None, 1).is_some());
}
