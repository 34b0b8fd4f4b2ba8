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

//! Time-series fundamentals and valuation records

use serde::{Deserialize, Serialize};

/// One period of `time-series/fundamentals/{symbol}/{period}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FundamentalsRecord {
  pub fiscal_year: Option<i32>,
  pub fiscal_quarter: Option<i32>,
  pub filing_date: Option<String>,
  pub report_date: Option<String>,
  pub revenue: Option<f64>,
  pub income_net: Option<f64>,
  /// Gross profit over revenue, a fraction
  pub profit_gross_per_revenue: Option<f64>,
  pub profit_gross: Option<f64>,
  pub ebitda_reported: Option<f64>,
}

/// One period of `time-series/FUNDAMENTAL_VALUATIONS/{symbol}/{period}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValuationRecord {
  pub fiscal_year: Option<i32>,
  pub fiscal_quarter: Option<i32>,
  pub filing_date: Option<String>,
  pub price_accounting_period_end: Option<f64>,
  pub market_cap_period_end: Option<f64>,
  pub enterprise_value: Option<f64>,
  pub ev_to_sales: Option<f64>,
  pub ev_to_ebitda: Option<f64>,
  #[serde(rename = "pToE")]
  pub p_to_e: Option<f64>,
  pub ebitda_margin: Option<f64>,
}

/// Fundamentals periods, most recent first as the provider returns them
pub type FundamentalsSeries = Vec<FundamentalsRecord>;

/// Valuation periods, most recent first as the provider returns them
pub type ValuationSeries = Vec<ValuationRecord>;

#[cfg(test)]
mod tests {
  use super::*;
  use iex_core::test_utils::{FundamentalsFixture, ValuationFixture, valuation_series};

  #[test]
  fn test_valuation_record_field_names() {
    let record: ValuationRecord =
      serde_json::from_value(ValuationFixture::default().to_json()).unwrap();
    assert_eq!(record.fiscal_year, Some(2021));
    assert_eq!(record.p_to_e, Some(33.123456));
    assert_eq!(record.price_accounting_period_end, Some(270.9));
    assert_eq!(record.market_cap_period_end, Some(2_034_567_890_123.0));
    assert_eq!(record.ev_to_ebitda, Some(25.123456));
    assert_eq!(record.ebitda_margin, Some(0.487654));
  }

  #[test]
  fn test_fundamentals_record_field_names() {
    let record: FundamentalsRecord =
      serde_json::from_value(FundamentalsFixture::default().to_json()).unwrap();
    assert_eq!(record.fiscal_quarter, Some(4));
    assert_eq!(record.revenue, Some(168_088_000_000.0));
    assert_eq!(record.income_net, Some(61_271_000_000.0));
    assert_eq!(record.profit_gross_per_revenue, Some(0.689276));
    assert_eq!(record.filing_date.as_deref(), Some("2021-07-29"));
  }

  #[test]
  fn test_series_keeps_provider_order() {
    let json = valuation_series(&[
      ValuationFixture { fiscal_year: 2021, ..Default::default() },
      ValuationFixture { fiscal_year: 2020, ..Default::default() },
    ]);
    let series: ValuationSeries = serde_json::from_value(json).unwrap();
    let years: Vec<_> = series.iter().map(|r| r.fiscal_year).collect();
    assert_eq!(years, vec![Some(2021), Some(2020)]);
  }

  #[test]
  fn test_null_values_become_none() {
    let record: ValuationRecord =
      serde_json::from_str(r#"{"pToE": null, "evToSales": 11.2}"#).unwrap();
    assert_eq!(record.p_to_e, None);
    assert_eq!(record.ev_to_sales, Some(11.2));
  }
}
