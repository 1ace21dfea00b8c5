//! Money Formatting
//!
//! Amounts arrive from the API as integer minor units alongside a lower-case
//! ISO-4217 currency code.

use rust_decimal::{
    Decimal, RoundingStrategy,
    prelude::{FromPrimitive, ToPrimitive},
};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use thiserror::Error;

/// Errors that can occur while formatting an amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    /// The currency code is not a known ISO-4217 code.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Applying the tax rate overflowed the minor unit range.
    #[error("tax-inclusive amount overflowed")]
    Overflow,
}

/// Look up a currency by its ISO-4217 code, ignoring case.
pub fn currency(code: &str) -> Option<&'static Currency> {
    iso::find(&code.trim().to_ascii_uppercase())
}

/// Format a minor unit amount with the currency symbol (e.g. `500`, `"usd"` → `"$5.00"`).
///
/// # Errors
///
/// Returns [`AmountError::UnknownCurrency`] if the code is not recognised.
pub fn format_amount(minor: i64, currency_code: &str) -> Result<String, AmountError> {
    let currency = currency(currency_code)
        .ok_or_else(|| AmountError::UnknownCurrency(currency_code.to_string()))?;

    Ok(Money::from_minor(minor, currency).to_string())
}

/// Format a minor unit amount, grossed up by `tax_rate` percent when present.
///
/// # Errors
///
/// - [`AmountError::UnknownCurrency`]: the code is not recognised.
/// - [`AmountError::Overflow`]: the tax-inclusive amount does not fit in minor units.
pub fn format_amount_with_tax(
    minor: i64,
    currency_code: &str,
    tax_rate: Option<Decimal>,
) -> Result<String, AmountError> {
    let minor = match tax_rate {
        Some(rate) => with_tax(minor, rate)?,
        None => minor,
    };

    format_amount(minor, currency_code)
}

/// Gross up a minor unit amount by a percentage tax rate, rounding half away from zero.
///
/// # Errors
///
/// Returns [`AmountError::Overflow`] if the result cannot be represented.
pub fn with_tax(minor: i64, tax_rate: Decimal) -> Result<i64, AmountError> {
    let Some(amount) = Decimal::from_i64(minor) else {
        return Err(AmountError::Overflow);
    };

    let multiplier = Decimal::ONE
        .checked_add(tax_rate / Decimal::ONE_HUNDRED)
        .ok_or(AmountError::Overflow)?;

    amount
        .checked_mul(multiplier)
        .map(|gross| gross.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|gross| gross.to_i64())
        .ok_or(AmountError::Overflow)
}
