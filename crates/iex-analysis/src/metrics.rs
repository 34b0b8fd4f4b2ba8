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

//! Per-ticker valuation metrics

use crate::numeric::{MILLION, round_half_even, unrounded};
use crate::source::FundamentalsSource;
use iex_core::{Error, Result, normalize_symbol};
use iex_models::fundamentals::{FundamentalsRecord, ValuationRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Latest annual valuation snapshot of one ticker.
///
/// Market cap, enterprise value and net income are in millions; margins are
/// fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerMetrics {
  pub symbol: String,
  /// Fiscal year of the valuation record the figures come from
  pub fiscal_year: Option<i32>,
  pub price: Decimal,
  pub ev_to_sales: Decimal,
  pub ev_to_ebitda: Decimal,
  pub market_cap: Decimal,
  pub pe_ratio: Decimal,
  pub gross_margin: Decimal,
  pub ebitda_margin: Decimal,
  pub net_income: Decimal,
  pub enterprise_value: Decimal,
}

pub(crate) fn required(value: Option<f64>, symbol: &str, field: &str) -> Result<f64> {
  value.ok_or_else(|| Error::missing_field(symbol, field))
}

/// Warn when the two records describe different fiscal years
pub(crate) fn check_fiscal_years(
  symbol: &str,
  valuation: &ValuationRecord,
  fundamentals: &FundamentalsRecord,
) {
  if let (Some(valuation_year), Some(fundamentals_year)) =
    (valuation.fiscal_year, fundamentals.fiscal_year)
  {
    if valuation_year != fundamentals_year {
      warn!(
        "{}: valuation record is FY{} but fundamentals record is FY{}",
        symbol, valuation_year, fundamentals_year
      );
    }
  }
}

impl TickerMetrics {
  /// Build the metrics from the latest valuation and fundamentals records.
  ///
  /// Pure over its inputs: the same two records always give the same metrics.
  pub fn from_records(
    symbol: &str,
    valuation: &ValuationRecord,
    fundamentals: &FundamentalsRecord,
  ) -> Result<Self> {
    let symbol = normalize_symbol(symbol)
      .ok_or_else(|| Error::InvalidInput("symbol must not be blank".to_string()))?;
    let s = symbol.as_str();
    check_fiscal_years(s, valuation, fundamentals);

    let price = required(valuation.price_accounting_period_end, s, "priceAccountingPeriodEnd")?;
    let ev_to_sales = required(valuation.ev_to_sales, s, "evToSales")?;
    let ev_to_ebitda = required(valuation.ev_to_ebitda, s, "evToEbitda")?;
    let market_cap = required(valuation.market_cap_period_end, s, "marketCapPeriodEnd")?;
    let pe_ratio = required(valuation.p_to_e, s, "pToE")?;
    let ebitda_margin = required(valuation.ebitda_margin, s, "ebitdaMargin")?;
    let enterprise_value = required(valuation.enterprise_value, s, "enterpriseValue")?;
    let gross_margin =
      required(fundamentals.profit_gross_per_revenue, s, "profitGrossPerRevenue")?;
    let net_income = required(fundamentals.income_net, s, "incomeNet")?;

    Ok(Self {
      fiscal_year: valuation.fiscal_year,
      price: unrounded(price, "priceAccountingPeriodEnd", s)?,
      ev_to_sales: round_half_even(ev_to_sales, 4, "evToSales", s)?,
      ev_to_ebitda: round_half_even(ev_to_ebitda, 4, "evToEbitda", s)?,
      market_cap: round_half_even(market_cap / MILLION, 0, "marketCapPeriodEnd", s)?,
      pe_ratio: round_half_even(pe_ratio, 3, "pToE", s)?,
      gross_margin: round_half_even(gross_margin, 4, "profitGrossPerRevenue", s)?,
      ebitda_margin: round_half_even(ebitda_margin, 4, "ebitdaMargin", s)?,
      net_income: unrounded(net_income / MILLION, "incomeNet", s)?,
      enterprise_value: round_half_even(enterprise_value / MILLION, 0, "enterpriseValue", s)?,
      symbol,
    })
  }

  /// Build the metrics from element 0 of each most-recent-first series
  pub fn from_series(
    symbol: &str,
    valuations: &[ValuationRecord],
    fundamentals: &[FundamentalsRecord],
  ) -> Result<Self> {
    let valuation = latest_valuation(symbol, valuations)?;
    let latest = latest_fundamentals(symbol, fundamentals)?;
    Self::from_records(symbol, valuation, latest)
  }
}

/// Fetch both annual series for `symbol` and reduce their latest entries to
/// [`TickerMetrics`].
///
/// The valuation series is requested first, then the fundamentals series.
/// An empty series fails with `Error::MissingData` before the second request
/// is made.
#[instrument(skip(source))]
pub async fn extract<S>(source: &S, symbol: &str) -> Result<TickerMetrics>
where
  S: FundamentalsSource + ?Sized,
{
  let valuations = source.annual_valuations(symbol).await?;
  latest_valuation(symbol, &valuations)?;

  let fundamentals = source.annual_fundamentals(symbol).await?;
  let metrics = TickerMetrics::from_series(symbol, &valuations, &fundamentals)?;
  debug!("Extracted metrics for {} (FY{:?})", metrics.symbol, metrics.fiscal_year);
  Ok(metrics)
}

pub(crate) fn latest_valuation<'a>(
  symbol: &str,
  series: &'a [ValuationRecord],
) -> Result<&'a ValuationRecord> {
  series
    .first()
    .ok_or_else(|| Error::MissingData(format!("{} has no annual valuation records", symbol)))
}

pub(crate) fn latest_fundamentals<'a>(
  symbol: &str,
  series: &'a [FundamentalsRecord],
) -> Result<&'a FundamentalsRecord> {
  series
    .first()
    .ok_or_else(|| Error::MissingData(format!("{} has no annual fundamentals records", symbol)))
}
