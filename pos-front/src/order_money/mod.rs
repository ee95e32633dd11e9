//! Money calculation utilities using rust_decimal for precision
//!
//! Prices stay `Decimal` end to end, so summing line totals never shows
//! float error at the cent level. Results are rounded to 2 decimal places
//! with half-up (midpoint away from zero) rounding.

use rust_decimal::prelude::*;
use shared::order::LineItem;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum quantity of a single line
pub const MAX_QUANTITY: i32 = 9999;

/// Clamp a requested line quantity to [`MAX_QUANTITY`]
#[inline]
pub fn clamp_quantity(quantity: i32) -> i32 {
    quantity.min(MAX_QUANTITY)
}

/// Round a monetary value to cents
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Line total: unit_price * quantity (unrounded)
#[inline]
pub fn line_total(line: &LineItem) -> Decimal {
    line.unit_price * Decimal::from(line.quantity)
}

/// Sum of all line totals, rounded to cents. Zero for no lines.
pub fn sum_lines(lines: &[LineItem]) -> Decimal {
    round_money(lines.iter().map(line_total).sum())
}

/// Average of `total` over `count`, rounded to cents. Zero when `count == 0`.
pub fn average(total: Decimal, count: usize) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    round_money(total / Decimal::from(count))
}

/// Format an amount for display, e.g. `$15.00`
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    format!("{}{:.2}", symbol, round_money(amount))
}
