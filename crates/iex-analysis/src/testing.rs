//! In-memory source for unit tests

use crate::source::FundamentalsSource;
use async_trait::async_trait;
use iex_core::test_utils::{
  FundamentalsFixture, ValuationFixture, fundamentals_series, valuation_series,
};
use iex_core::{Error, Result, normalize_symbol};
use iex_models::fundamentals::{FundamentalsSeries, ValuationSeries};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Default)]
pub struct FixtureSource {
  valuations: HashMap<String, Value>,
  fundamentals: HashMap<String, Value>,
  delays: HashMap<String, Duration>,
  pub calls: AtomicUsize,
}

impl FixtureSource {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_ticker(
    mut self,
    symbol: &str,
    valuations: &[ValuationFixture],
    fundamentals: &[FundamentalsFixture],
  ) -> Self {
    self.valuations.insert(symbol.to_string(), valuation_series(valuations));
    self.fundamentals.insert(symbol.to_string(), fundamentals_series(fundamentals));
    self
  }

  pub fn with_valuations_json(mut self, symbol: &str, series: Value) -> Self {
    self.valuations.insert(symbol.to_string(), series);
    self
  }

  pub fn with_fundamentals_json(mut self, symbol: &str, series: Value) -> Self {
    self.fundamentals.insert(symbol.to_string(), series);
    self
  }

  /// Answer `symbol` only after `delay`, to shuffle completion order
  pub fn with_delay(mut self, symbol: &str, delay: Duration) -> Self {
    self.delays.insert(symbol.to_string(), delay);
    self
  }

  async fn lookup(&self, table: &HashMap<String, Value>, symbol: &str) -> Result<Value> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    let key = normalize_symbol(symbol).unwrap_or_default();
    if let Some(delay) = self.delays.get(&key) {
      tokio::time::sleep(*delay).await;
    }
    table.get(&key).cloned().ok_or_else(|| Error::UnknownSymbol(key))
  }
}

#[async_trait]
impl FundamentalsSource for FixtureSource {
  async fn annual_valuations(&self, symbol: &str) -> Result<ValuationSeries> {
    Ok(serde_json::from_value(self.lookup(&self.valuations, symbol).await?)?)
  }

  async fn annual_fundamentals(&self, symbol: &str) -> Result<FundamentalsSeries> {
    Ok(serde_json::from_value(self.lookup(&self.fundamentals, symbol).await?)?)
  }
}
