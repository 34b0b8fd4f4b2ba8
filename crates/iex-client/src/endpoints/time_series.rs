use super::Gateway;
use crate::transport::ApiRequest;
use iex_core::{Endpoint, Error, Period, Result};
use iex_models::fundamentals::*;
use tracing::instrument;

/// `time-series/...` datasets: reported fundamentals and valuation ratios
pub struct TimeSeriesEndpoints {
  gateway: Gateway,
}

impl TimeSeriesEndpoints {
  /// Create a new time series endpoints instance
  pub fn new(gateway: Gateway) -> Self {
    Self { gateway }
  }

  fn series_request(endpoint: Endpoint, symbol: &str, period: Period, last: u32) -> Result<ApiRequest> {
    if last == 0 {
      return Err(Error::InvalidInput("a time series needs at least one period".to_string()));
    }
    Ok(ApiRequest::new(endpoint, symbol).with_segment(period).with_query("last", last))
  }

  /// Reported fundamentals (revenue, net income, gross margin, filing dates),
  /// most recent period first
  ///
  /// # Arguments
  ///
  /// * `symbol` - The stock symbol
  /// * `period` - Quarterly or annual reports
  /// * `last` - Number of periods to return
  ///
  /// # Examples
  ///
  /// ```rust,ignore
  /// let annual = client.time_series().fundamentals("MSFT", Period::Annual, 4).await?;
  /// for report in &annual {
  ///     println!("{:?}: {:?}", report.fiscal_year, report.revenue);
  /// }
  /// # Ok::<(), iex_core::Error>(())
  /// ```
  #[instrument(skip(self))]
  pub async fn fundamentals(
    &self,
    symbol: &str,
    period: Period,
    last: u32,
  ) -> Result<FundamentalsSeries> {
    let request = Self::series_request(Endpoint::Fundamentals, symbol, period, last)?;
    self.gateway.get(&request).await
  }

  /// Valuation ratios at each period end (P/E, EV/Sales, EV/EBITDA, market
  /// cap, enterprise value, EBITDA margin), most recent period first
  #[instrument(skip(self))]
  pub async fn valuations(
    &self,
    symbol: &str,
    period: Period,
    last: u32,
  ) -> Result<ValuationSeries> {
    let request = Self::series_request(Endpoint::FundamentalValuations, symbol, period, last)?;
    self.gateway.get(&request).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_series_request_shape() {
    let request =
      TimeSeriesEndpoints::series_request(Endpoint::Fundamentals, "msft", Period::Quarterly, 4)
        .unwrap();
    assert_eq!(request.path(), "time-series/fundamentals/MSFT/quarterly");
    assert_eq!(request.query.get("last").map(String::as_str), Some("4"));
  }

  #[test]
  fn test_series_request_rejects_zero_periods() {
    let result =
      TimeSeriesEndpoints::series_request(Endpoint::FundamentalValuations, "MSFT", Period::Annual, 0);
    assert!(matches!(result, Err(Error::InvalidInput(_))));
  }
}
