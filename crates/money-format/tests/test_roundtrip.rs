//! Property tests for the decimal ⇄ minor-unit conversion.

use money_currencies::list_all;
use money_format::{format, format_plain, from_minor_units, to_minor_units};
use proptest::prelude::*;

const LIMIT: i64 = 1_000_000_000_000;

proptest! {
    #[test]
    fn minor_round_trip(index in 0..list_all().len(), minor in -LIMIT..LIMIT) {
        let code = list_all()[index].code;
        prop_assert_eq!(to_minor_units(from_minor_units(minor, code), code), minor);
    }

    #[test]
    fn sign_precedes_symbol(index in 0..list_all().len(), minor in 1..LIMIT) {
        let currency = list_all()[index];
        let negative = format(-minor, currency.code);
        prop_assert_eq!(negative, format!("-{}", format(minor, currency.code)));
        prop_assert!(format(minor, currency.code).starts_with(currency.symbol));
    }

    #[test]
    fn plain_strips_to_the_integer(minor in -LIMIT..LIMIT) {
        let digits: String = format_plain(minor, "USD")
            .chars()
            .filter(|c| *c != ',' && *c != '.')
            .collect();
        prop_assert_eq!(digits.parse::<i64>().unwrap(), minor);
    }
}
