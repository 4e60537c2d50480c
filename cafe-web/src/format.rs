//! Display formatting for money and dates.
use cafe_cart::constants::CURRENCY_SYMBOL;
use chrono::NaiveDate;

/// Amount with two decimals, as shown in totals: `₹420.00`.
#[must_use]
pub fn fmt_rupees(amount: u64) -> String {
    format!("{CURRENCY_SYMBOL}{amount}.00")
}

/// Menu list price without decimals: `₹249`.
#[must_use]
pub fn fmt_price(amount: impl Into<u64>) -> String {
    format!("{CURRENCY_SYMBOL}{}", amount.into())
}

/// Order date in the US short form the order history uses, e.g. `7/15/2023`.
#[must_use]
pub fn fmt_order_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
