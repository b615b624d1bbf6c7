//! Recurring-price labels ("per month", "every 3 months").

use std::str::FromStr;

use money_core::errors::{Error, Result};
use money_core::MinorAmount;

use crate::formatters::format;

/// Billing interval of a recurring price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Interval {
    /// Daily.
    Day,
    /// Weekly.
    Week,
    /// Monthly.
    Month,
    /// Yearly.
    Year,
}

impl Interval {
    /// Singular unit name (`"month"`).
    pub fn singular(&self) -> &'static str {
        match self {
            Interval::Day => "day",
            Interval::Week => "week",
            Interval::Month => "month",
            Interval::Year => "year",
        }
    }

    /// Plural unit name (`"months"`).
    pub fn plural(&self) -> &'static str {
        match self {
            Interval::Day => "days",
            Interval::Week => "weeks",
            Interval::Month => "months",
            Interval::Year => "years",
        }
    }

    /// Recurrence phrase for `count` intervals: `"per month"` for a count of
    /// one (or zero), `"every 3 months"` otherwise.
    pub fn phrase(&self, count: u32) -> String {
        if count <= 1 {
            format!("per {}", self.singular())
        } else {
            format!("every {count} {}", self.plural())
        }
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(Interval::Day),
            "week" => Ok(Interval::Week),
            "month" => Ok(Interval::Month),
            "year" => Ok(Interval::Year),
            _ => Err(Error::InvalidArgument(format!("unknown interval {s:?}"))),
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.singular())
    }
}

/// Recurrence phrase for an interval given by name.
///
/// Unrecognised names give an empty phrase.
pub fn interval_phrase(interval: &str, count: u32) -> String {
    match interval.parse::<Interval>() {
        Ok(interval) => interval.phrase(count),
        Err(err) => {
            tracing::debug!(%err, "no phrase for interval");
            String::new()
        }
    }
}

/// [`format`] followed by a recurrence phrase when `interval` is given.
///
/// The phrase is always preceded by a single space, even when the interval
/// name is not recognised and the phrase is empty (`"$99.99 "`).
///
/// ```
/// use money_format::format_with_interval;
/// assert_eq!(format_with_interval(9999, "USD", None, 1), "$99.99");
/// assert_eq!(format_with_interval(9999, "USD", Some("month"), 1), "$99.99 per month");
/// assert_eq!(format_with_interval(9999, "USD", Some("month"), 3), "$99.99 every 3 months");
/// ```
pub fn format_with_interval(
    minor: MinorAmount,
    code: &str,
    interval: Option<&str>,
    interval_count: u32,
) -> String {
    let price = format(minor, code);
    match interval {
        Some(name) => format!("{price} {}", interval_phrase(name, interval_count)),
        None => price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("month".parse::<Interval>(), Ok(Interval::Month));
        assert_eq!("YEAR".parse::<Interval>(), Ok(Interval::Year));
        assert!("fortnight".parse::<Interval>().is_err());
        assert!("".parse::<Interval>().is_err());
    }

    #[test]
    fn test_phrase() {
        assert_eq!(Interval::Day.phrase(1), "per day");
        assert_eq!(Interval::Week.phrase(2), "every 2 weeks");
        assert_eq!(Interval::Year.phrase(0), "per year");
        assert_eq!(Interval::Month.to_string(), "month");
    }

    #[test]
    fn with_interval() {
        assert_eq!(
            format_with_interval(9999, "USD", Some("month"), 1),
            "$99.99 per month"
        );
        assert_eq!(
            format_with_interval(9999, "USD", Some("month"), 3),
            "$99.99 every 3 months"
        );
        assert_eq!(
            format_with_interval(500, "JPY", Some("week"), 2),
            "¥500 every 2 weeks"
        );
        assert_eq!(format_with_interval(9999, "USD", None, 5), "$99.99");
    }

    #[test]
    fn unknown_interval_keeps_trailing_space() {
        assert_eq!(
            format_with_interval(9999, "USD", Some("fortnight"), 1),
            "$99.99 "
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_lowercase() {
        assert_eq!(serde_json::to_string(&Interval::Month).unwrap(), "\"month\"");
        let parsed: Interval = serde_json::from_str("\"week\"").unwrap();
        assert_eq!(parsed, Interval::Week);
    }
}
