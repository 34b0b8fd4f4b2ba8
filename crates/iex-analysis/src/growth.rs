/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Year-over-year revenue growth

use crate::numeric::{MILLION, round_half_even, unrounded};
use iex_core::{Error, Result};
use iex_models::fundamentals::FundamentalsRecord;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of consecutive period pairs the growth view covers
pub const GROWTH_PERIODS: usize = 3;

/// Growth of one period over the period before it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueGrowth {
  /// Fiscal year of the later period
  pub fiscal_year: Option<i32>,
  /// Revenue of the later period, in millions
  pub revenue: Decimal,
  /// Percent change over the prior period, 2 places
  pub growth_pct: Decimal,
}

/// Growth for each of the (up to) three most recent consecutive pairs of a
/// most-recent-first series. The result is most recent first as well.
///
/// `growth = (revenue[i] - revenue[i+1]) / revenue[i+1] * 100`
///
/// # Errors
///
/// * `Error::MissingData` - fewer than two records, or a record without revenue
/// * `Error::Division` - a prior period reports zero revenue
pub fn revenue_growth(symbol: &str, series: &[FundamentalsRecord]) -> Result<Vec<RevenueGrowth>> {
  if series.len() < 2 {
    return Err(Error::MissingData(format!(
      "{} needs at least two annual periods for revenue growth, got {}",
      symbol,
      series.len()
    )));
  }

  series
    .windows(2)
    .take(GROWTH_PERIODS)
    .map(|pair| {
      let (current, prior) = (&pair[0], &pair[1]);
      let revenue = current.revenue.ok_or_else(|| Error::missing_field(symbol, "revenue"))?;
      let prior_revenue = prior.revenue.ok_or_else(|| Error::missing_field(symbol, "revenue"))?;

      if prior_revenue == 0.0 {
        return Err(Error::Division(format!(
          "{} reports zero revenue for FY{}",
          symbol,
          prior.fiscal_year.map_or_else(|| "?".to_string(), |y| y.to_string())
        )));
      }

      let pct = (revenue - prior_revenue) / prior_revenue * 100.0;
      Ok(RevenueGrowth {
        fiscal_year: current.fiscal_year,
        revenue: unrounded(revenue / MILLION, "revenue", symbol)?,
        growth_pct: round_half_even(pct, 2, "revenue", symbol)?,
      })
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use iex_core::test_utils::revenue_series;
  use std::str::FromStr;

  fn series(revenues: &[f64]) -> Vec<FundamentalsRecord> {
    serde_json::from_value(revenue_series(2021, revenues)).unwrap()
  }

  fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
  }

  #[test]
  fn test_single_pair() {
    let growth = revenue_growth("T", &series(&[100.0, 80.0])).unwrap();

    assert_eq!(growth.len(), 1);
    assert_eq!(growth[0].growth_pct, dec("25.00"));
    assert_eq!(growth[0].fiscal_year, Some(2021));
  }

  #[test]
  fn test_three_pairs_from_four_years() {
    let growth = revenue_growth(
      "MSFT",
      &series(&[168_088_000_000.0, 143_015_000_000.0, 125_843_000_000.0, 110_360_000_000.0]),
    )
    .unwrap();

    let pct: Vec<Decimal> = growth.iter().map(|g| g.growth_pct).collect();
    assert_eq!(pct, vec![dec("17.53"), dec("13.65"), dec("14.03")]);
    assert_eq!(growth[0].revenue, dec("168088"));
    assert_eq!(growth[2].fiscal_year, Some(2019));
  }

  #[test]
  fn test_longer_series_is_capped() {
    let growth = revenue_growth("T", &series(&[5.0, 4.0, 3.0, 2.0, 1.0])).unwrap();
    assert_eq!(growth.len(), GROWTH_PERIODS);
  }

  #[test]
  fn test_decline_is_negative() {
    let growth = revenue_growth("T", &series(&[80.0, 100.0])).unwrap();
    assert_eq!(growth[0].growth_pct, dec("-20"));
  }

  #[test]
  fn test_zero_prior_revenue_is_division_error() {
    let result = revenue_growth("T", &series(&[100.0, 0.0]));
    assert!(matches!(result, Err(Error::Division(_))));
  }

  #[test]
  fn test_short_series_is_missing_data() {
    assert!(matches!(revenue_growth("T", &series(&[100.0])), Err(Error::MissingData(_))));
    assert!(matches!(revenue_growth("T", &[]), Err(Error::MissingData(_))));
  }

  #[test]
  fn test_missing_revenue_is_missing_data() {
    let mut records = series(&[100.0, 80.0]);
    records[1].revenue = None;
    assert!(matches!(revenue_growth("T", &records), Err(Error::MissingData(_))));
  }
}
