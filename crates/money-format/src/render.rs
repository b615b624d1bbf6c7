//! HTML rendering of prices, and resolution of currency and interval from
//! an item that carries them.

use std::collections::HashMap;

use askama::Template;
use money_core::utilities::parse_numeric;
use num_traits::ToPrimitive;

use crate::interval::format_with_interval;

/// Currency used when neither the caller nor the item names one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// CSS class of the element wrapping a rendered price.
pub const PRICE_CLASS: &str = "money-price";

/// HTML wrapper around a formatted price; `price` is escaped on render.
#[derive(Template)]
#[template(path = "price.html")]
struct PriceHtml<'a> {
    class: &'a str,
    price: &'a str,
}

/// Something that knows its own currency and billing interval, such as a
/// product, a price, or a subscription plan.
///
/// Every accessor defaults to `None`; implement only what the type has.
pub trait PriceSource {
    /// Currency code of the item.
    fn currency(&self) -> Option<&str> {
        None
    }

    /// Billing interval name (`"day"`, `"week"`, `"month"`, `"year"`).
    fn recurring_interval(&self) -> Option<&str> {
        None
    }

    /// Number of intervals between charges.
    fn recurring_interval_count(&self) -> Option<u32> {
        None
    }
}

/// Loosely-typed records (decoded form or metadata fields) expose the
/// same-named keys.
impl PriceSource for HashMap<String, String> {
    fn currency(&self) -> Option<&str> {
        self.get("currency").map(String::as_str)
    }

    fn recurring_interval(&self) -> Option<&str> {
        self.get("recurring_interval").map(String::as_str)
    }

    fn recurring_interval_count(&self) -> Option<u32> {
        self.get("recurring_interval_count")?.trim().parse().ok()
    }
}

/// Values passed explicitly to [`render_item`]; each one takes precedence
/// over what the item reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions<'a> {
    /// Currency code override.
    pub currency: Option<&'a str>,
    /// Interval name override.
    pub interval: Option<&'a str>,
    /// Interval count override.
    pub interval_count: Option<u32>,
}

/// Render a minor-unit amount given as text inside a
/// `<span class="money-price">` element.
///
/// Returns `None` when `amount` is not numeric or does not fit in a
/// minor-unit amount.  Fractional amounts are rounded half away from zero
/// to whole minor units.
///
/// ```
/// use money_format::render;
/// assert_eq!(
///     render("9999", "USD", Some("month"), 1).as_deref(),
///     Some(r#"<span class="money-price">$99.99 per month</span>"#)
/// );
/// assert_eq!(render("not-a-number", "USD", None, 1), None);
/// ```
pub fn render(
    amount: &str,
    code: &str,
    interval: Option<&str>,
    interval_count: u32,
) -> Option<String> {
    let Some(value) = parse_numeric(amount) else {
        tracing::debug!(amount, "non-numeric amount, nothing to render");
        return None;
    };
    let Some(minor) = value.round().to_i64() else {
        tracing::debug!(amount, "amount out of minor-unit range, nothing to render");
        return None;
    };
    let price = format_with_interval(minor, code, interval, interval_count);
    let html = PriceHtml {
        class: PRICE_CLASS,
        price: &price,
    };
    match html.render() {
        Ok(markup) => Some(markup),
        Err(err) => {
            tracing::debug!(%err, "price template failed to render");
            None
        }
    }
}

/// Like [`render`], resolving currency and interval from `item`.
///
/// Each value comes from `options` when set, else from the item when it
/// reports a non-empty value, else from the defaults
/// ([`DEFAULT_CURRENCY`], no interval, a count of one).
pub fn render_item<S: PriceSource + ?Sized>(
    amount: &str,
    item: &S,
    options: RenderOptions<'_>,
) -> Option<String> {
    let code = options
        .currency
        .or_else(|| non_empty(item.currency()))
        .unwrap_or(DEFAULT_CURRENCY);
    let interval = options
        .interval
        .or_else(|| non_empty(item.recurring_interval()));
    let interval_count = options
        .interval_count
        .or_else(|| item.recurring_interval_count().filter(|n| *n > 0))
        .unwrap_or(1);
    render(amount, code, interval, interval_count)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plan {
        currency: &'static str,
        interval: &'static str,
        interval_count: u32,
    }

    impl PriceSource for Plan {
        fn currency(&self) -> Option<&str> {
            Some(self.currency)
        }

        fn recurring_interval(&self) -> Option<&str> {
            Some(self.interval)
        }

        fn recurring_interval_count(&self) -> Option<u32> {
            Some(self.interval_count)
        }
    }

    struct Bare;

    impl PriceSource for Bare {}

    fn span(inner: &str) -> String {
        format!(r#"<span class="money-price">{inner}</span>"#)
    }

    #[test]
    fn renders_numeric_text() {
        assert_eq!(render("9999", "USD", None, 1), Some(span("$99.99")));
        assert_eq!(render(" -500 ", "JPY", None, 1), Some(span("-¥500")));
        assert_eq!(render("1999.5", "USD", None, 1), Some(span("$20.00")));
    }

    #[test]
    fn rejects_non_numeric() {
        assert_eq!(render("not-a-number", "USD", None, 1), None);
        assert_eq!(render("", "USD", Some("month"), 1), None);
        assert_eq!(render("NaN", "USD", None, 1), None);
    }

    #[test]
    fn rejects_out_of_range_amounts() {
        assert_eq!(render("1e30", "USD", None, 1), None);
        assert_eq!(render("-1e30", "JPY", Some("month"), 1), None);
        assert_eq!(render("9223372036854775807", "USD", None, 1), None);
        assert_eq!(
            render("4611686018427387904", "JPY", None, 1),
            Some(span("¥4,611,686,018,427,387,904"))
        );
    }

    #[test]
    fn escapes_markup() {
        let html = render("1000", "<b>", None, 1).unwrap();
        assert!(html.starts_with(r#"<span class="money-price">"#), "{html}");
        assert!(html.ends_with("1000</span>"), "{html}");
        assert!(!html.contains("<B>"), "{html}");
        assert!(!html.contains("<b>"), "{html}");
    }

    #[test]
    fn item_values_are_used() {
        let plan = Plan {
            currency: "eur",
            interval: "month",
            interval_count: 3,
        };
        assert_eq!(
            render_item("1500", &plan, RenderOptions::default()),
            Some(span("€15.00 every 3 months"))
        );
    }

    #[test]
    fn options_override_item() {
        let plan = Plan {
            currency: "EUR",
            interval: "month",
            interval_count: 3,
        };
        let options = RenderOptions {
            currency: Some("GBP"),
            interval: Some("year"),
            interval_count: Some(1),
        };
        assert_eq!(
            render_item("1500", &plan, options),
            Some(span("£15.00 per year"))
        );
    }

    #[test]
    fn empty_item_values_fall_through_to_defaults() {
        let plan = Plan {
            currency: "",
            interval: " ",
            interval_count: 0,
        };
        assert_eq!(
            render_item("1500", &plan, RenderOptions::default()),
            Some(span("$15.00"))
        );
        assert_eq!(
            render_item("1500", &Bare, RenderOptions::default()),
            Some(span("$15.00"))
        );
    }

    #[test]
    fn map_fields() {
        let record: HashMap<String, String> = [
            ("currency", "jpy"),
            ("recurring_interval", "week"),
            ("recurring_interval_count", "2"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect();
        assert_eq!(
            render_item("800", &record, RenderOptions::default()),
            Some(span("¥800 every 2 weeks"))
        );
        assert_eq!(render_item("abc", &record, RenderOptions::default()), None);
    }
}
