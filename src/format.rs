/// Display formatting for order fields
///
/// Dates are shown as `DD/MM/YYYY` in the operator's local timezone, money
/// with two fixed decimals behind a currency glyph.

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Display;

use crate::state::data::Address;

/// Format an order timestamp as `DD/MM/YYYY` on the local calendar.
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates; anything else
/// yields `None`.
pub fn format_date(raw: &str) -> Option<String> {
    format_date_in(raw, &Local)
}

/// Same as [`format_date`], on the calendar of `tz`
pub fn format_date_in<Tz>(raw: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.with_timezone(tz).format("%d/%m/%Y").to_string());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%d/%m/%Y").to_string())
}

/// `₹1249.50` style amount; a missing amount renders as zero
pub fn format_money(symbol: &str, amount: Option<Decimal>) -> String {
    let mut value = amount
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(2);
    format!("{symbol}{value}")
}

/// "First Last", skipping whatever is missing
pub fn customer_name(address: Option<&Address>) -> String {
    let Some(address) = address else {
        return String::new();
    };
    [address.first_name.as_deref(), address.last_name.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Street line and `city, state - pincode` line of the address card
pub fn address_lines(address: &Address) -> (String, String) {
    let field = |value: &Option<String>| value.clone().unwrap_or_default();
    (
        format!("{},", field(&address.address)),
        format!(
            "{}, {} - {}",
            field(&address.city),
            field(&address.state),
            field(&address.pincode)
        ),
    )
}
