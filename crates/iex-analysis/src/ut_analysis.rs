//! Single-ticker valuation overview with multi-year revenue growth

use crate::growth::{RevenueGrowth, revenue_growth};
use crate::metrics::{check_fiscal_years, latest_fundamentals, latest_valuation, required};
use crate::numeric::{MILLION, round_half_even, unrounded};
use crate::source::FundamentalsSource;
use iex_core::{Error, Result, normalize_symbol};
use iex_models::fundamentals::{FundamentalsRecord, ValuationRecord};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// The six latest-fiscal-year figures the UT view shows.
///
/// Market cap, enterprise value and net income are in millions. Unlike
/// [`TickerMetrics`](crate::TickerMetrics) it does not need EBITDA or gross
/// margin figures, so tickers without them still get a view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationOverview {
  pub symbol: String,
  pub fiscal_year: Option<i32>,
  pub price: Decimal,
  pub ev_to_sales: Decimal,
  pub pe_ratio: Decimal,
  pub market_cap: Decimal,
  pub net_income: Decimal,
  pub enterprise_value: Decimal,
}

impl ValuationOverview {
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
    let pe_ratio = required(valuation.p_to_e, s, "pToE")?;
    let market_cap = required(valuation.market_cap_period_end, s, "marketCapPeriodEnd")?;
    let enterprise_value = required(valuation.enterprise_value, s, "enterpriseValue")?;
    let net_income = required(fundamentals.income_net, s, "incomeNet")?;

    Ok(Self {
      fiscal_year: valuation.fiscal_year,
      price: unrounded(price, "priceAccountingPeriodEnd", s)?,
      ev_to_sales: round_half_even(ev_to_sales, 4, "evToSales", s)?,
      pe_ratio: round_half_even(pe_ratio, 3, "pToE", s)?,
      market_cap: round_half_even(market_cap / MILLION, 0, "marketCapPeriodEnd", s)?,
      net_income: unrounded(net_income / MILLION, "incomeNet", s)?,
      enterprise_value: round_half_even(enterprise_value / MILLION, 0, "enterpriseValue", s)?,
      symbol,
    })
  }
}

/// Latest-fiscal-year valuation overview plus revenue growth of one ticker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtAnalysis {
  pub overview: ValuationOverview,
  /// Oldest period first, the way the view lays the growth row out
  pub growth: Vec<RevenueGrowth>,
}

impl UtAnalysis {
  pub fn symbol(&self) -> &str {
    &self.overview.symbol
  }

  /// Most recent growth entry
  pub fn latest_growth(&self) -> Option<&RevenueGrowth> {
    self.growth.last()
  }
}

/// Build the UT Analysis view for `symbol`.
///
/// Fetches each annual series once. Needs at least two fundamentals periods;
/// see [`revenue_growth`].
#[instrument(skip(source))]
pub async fn ut_analysis<S>(source: &S, symbol: &str) -> Result<UtAnalysis>
where
  S: FundamentalsSource + ?Sized,
{
  let valuations = source.annual_valuations(symbol).await?;
  let fundamentals = source.annual_fundamentals(symbol).await?;
  let overview = ValuationOverview::from_records(
    symbol,
    latest_valuation(symbol, &valuations)?,
    latest_fundamentals(symbol, &fundamentals)?,
  )?;

  let mut growth = revenue_growth(&overview.symbol, &fundamentals)?;
  growth.reverse();

  info!("UT analysis for {}: {} growth periods", overview.symbol, growth.len());
  Ok(UtAnalysis { overview, growth })
}
