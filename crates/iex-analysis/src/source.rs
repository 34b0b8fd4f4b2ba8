//! Where the analysis layer gets its series from

use async_trait::async_trait;
use iex_client::IexClient;
use iex_core::{DEFAULT_SERIES_LAST, Period, Result};
use iex_models::fundamentals::{FundamentalsSeries, ValuationSeries};

/// Supplier of the annual series the extractor and growth view consume.
///
/// Both series are most recent period first. `IexClient` is the production
/// implementation; tests plug in fixtures.
#[async_trait]
pub trait FundamentalsSource: Send + Sync {
  /// Annual `FUNDAMENTAL_VALUATIONS` records
  async fn annual_valuations(&self, symbol: &str) -> Result<ValuationSeries>;

  /// Annual `fundamentals` records
  async fn annual_fundamentals(&self, symbol: &str) -> Result<FundamentalsSeries>;
}

#[async_trait]
impl FundamentalsSource for IexClient {
  async fn annual_valuations(&self, symbol: &str) -> Result<ValuationSeries> {
    self.time_series().valuations(symbol, Period::Annual, DEFAULT_SERIES_LAST).await
  }

  async fn annual_fundamentals(&self, symbol: &str) -> Result<FundamentalsSeries> {
    self.time_series().fundamentals(symbol, Period::Annual, DEFAULT_SERIES_LAST).await
  }
}
