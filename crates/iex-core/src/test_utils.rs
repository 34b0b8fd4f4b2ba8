//! Fixture payloads shaped like IEX Cloud responses.
//!
//! Enabled with the `test-utils` feature so the client, analysis and CLI test
//! suites all build their mock responses from the same field names.

use serde_json::{Value, json};

/// One `FUNDAMENTAL_VALUATIONS` record
#[derive(Debug, Clone)]
pub struct ValuationFixture {
  pub fiscal_year: i64,
  pub price: f64,
  pub ev_to_sales: f64,
  pub ev_to_ebitda: f64,
  pub market_cap: f64,
  pub pe_ratio: f64,
  pub ebitda_margin: f64,
  pub enterprise_value: f64,
}

impl Default for ValuationFixture {
  fn default() -> Self {
    Self {
      fiscal_year: 2021,
      price: 270.9,
      ev_to_sales: 12.345678,
      ev_to_ebitda: 25.123456,
      market_cap: 2_034_567_890_123.0,
      pe_ratio: 33.123456,
      ebitda_margin: 0.487654,
      enterprise_value: 1_987_654_321_000.0,
    }
  }
}

impl ValuationFixture {
  pub fn to_json(&self) -> Value {
    json!({
      "fiscalYear": self.fiscal_year,
      "fiscalQuarter": 4,
      "filingDate": format!("{}-07-29", self.fiscal_year),
      "priceAccountingPeriodEnd": self.price,
      "evToSales": self.ev_to_sales,
      "evToEbitda": self.ev_to_ebitda,
      "marketCapPeriodEnd": self.market_cap,
      "pToE": self.pe_ratio,
      "ebitdaMargin": self.ebitda_margin,
      "enterpriseValue": self.enterprise_value,
    })
  }
}

/// One `fundamentals` record
#[derive(Debug, Clone)]
pub struct FundamentalsFixture {
  pub fiscal_year: i64,
  pub fiscal_quarter: i64,
  pub revenue: f64,
  pub income_net: f64,
  pub gross_margin: f64,
}

impl Default for FundamentalsFixture {
  fn default() -> Self {
    Self {
      fiscal_year: 2021,
      fiscal_quarter: 4,
      revenue: 168_088_000_000.0,
      income_net: 61_271_000_000.0,
      gross_margin: 0.689276,
    }
  }
}

impl FundamentalsFixture {
  pub fn to_json(&self) -> Value {
    json!({
      "fiscalYear": self.fiscal_year,
      "fiscalQuarter": self.fiscal_quarter,
      "filingDate": format!("{}-07-29", self.fiscal_year),
      "revenue": self.revenue,
      "incomeNet": self.income_net,
      "profitGrossPerRevenue": self.gross_margin,
    })
  }
}

/// Annual valuation series, most recent first
pub fn valuation_series(records: &[ValuationFixture]) -> Value {
  Value::Array(records.iter().map(ValuationFixture::to_json).collect())
}

/// Annual fundamentals series, most recent first
pub fn fundamentals_series(records: &[FundamentalsFixture]) -> Value {
  Value::Array(records.iter().map(FundamentalsFixture::to_json).collect())
}

/// Fundamentals series with the given revenues, most recent first
pub fn revenue_series(start_year: i64, revenues: &[f64]) -> Value {
  let records: Vec<FundamentalsFixture> = revenues
    .iter()
    .enumerate()
    .map(|(i, revenue)| FundamentalsFixture {
      fiscal_year: start_year - i as i64,
      revenue: *revenue,
      ..Default::default()
    })
    .collect();
  fundamentals_series(&records)
}

