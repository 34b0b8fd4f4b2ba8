// Helpers for turning provider floats into display decimals

use iex_core::{Error, Result};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Divisor for figures shown in millions
pub const MILLION: f64 = 1_000_000.0;

/// Round `value` to `dp` places, ties to even, working on the exact binary
/// value of the float.
///
/// # Arguments
/// * `value` - The f64 value to convert
/// * `dp` - Decimal places to keep
/// * `field_name` - Name of the field for error messages
/// * `symbol` - Symbol being processed for error messages
///
/// # Returns
/// * `Ok(Decimal)` - The rounded value, with exactly `dp` places
/// * `Err(Error::Decode)` - If the value is NaN or infinite
pub fn round_half_even(value: f64, dp: u32, field_name: &str, symbol: &str) -> Result<Decimal> {
  Decimal::from_f64_retain(value)
    .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven))
    .ok_or_else(|| non_finite(value, field_name, symbol))
}

/// Convert `value` without rounding to a fixed number of places.
///
/// Keeps at most 15 significant digits, the precision `f64` reliably carries,
/// so `270.9` reads `270.9` rather than `270.8999999...`. Longer fractions end
/// at the 15th digit (`2/3` gives `0.666666666666667`).
pub fn unrounded(value: f64, field_name: &str, symbol: &str) -> Result<Decimal> {
  if !value.is_finite() {
    return Err(non_finite(value, field_name, symbol));
  }
  Decimal::from_f64(value)
    .map(|d| d.normalize())
    .ok_or_else(|| non_finite(value, field_name, symbol))
}

fn non_finite(value: f64, field_name: &str, symbol: &str) -> Error {
  Error::Decode(format!("{}: '{}' is not a representable number ({})", symbol, field_name, value))
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::str::FromStr;

  fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
  }

  #[test]
  fn test_round_to_places() {
    assert_eq!(round_half_even(12.345678, 4, "evToSales", "T").unwrap(), dec("12.3457"));
    assert_eq!(round_half_even(33.123456, 3, "pToE", "T").unwrap(), dec("33.123"));
    assert_eq!(round_half_even(2_034_567.890123, 0, "marketCap", "T").unwrap(), dec("2034568"));
  }

  #[test]
  fn test_exact_ties_go_to_even() {
    // 0.5, 2.5 and 0.125 are exact in binary
    assert_eq!(round_half_even(0.5, 0, "x", "T").unwrap(), dec("0"));
    assert_eq!(round_half_even(2.5, 0, "x", "T").unwrap(), dec("2"));
    assert_eq!(round_half_even(3.5, 0, "x", "T").unwrap(), dec("4"));
    assert_eq!(round_half_even(0.125, 2, "x", "T").unwrap(), dec("0.12"));
  }

  #[test]
  fn test_rounding_uses_binary_value() {
    // 2.675 is stored as 2.67499999...
    assert_eq!(round_half_even(2.675, 2, "x", "T").unwrap(), dec("2.67"));
  }

  #[test]
  fn test_unrounded_keeps_short_form() {
    assert_eq!(unrounded(270.9, "price", "T").unwrap().to_string(), "270.9");
    assert_eq!(unrounded(61_271.0, "incomeNet", "T").unwrap().to_string(), "61271");
  }

  #[test]
  fn test_unrounded_keeps_fifteen_significant_digits() {
    let value = unrounded(2.0 / 3.0, "incomeNet", "T").unwrap();
    assert_eq!(value.to_string(), "0.666666666666667");
  }

  #[test]
  fn test_non_finite_is_rejected() {
    assert!(matches!(round_half_even(f64::NAN, 2, "x", "T"), Err(Error::Decode(_))));
    assert!(matches!(unrounded(f64::INFINITY, "x", "T"), Err(Error::Decode(_))));
  }
}
