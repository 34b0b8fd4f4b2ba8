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

use crate::cache::{CacheConfig, ResponseCache};
use crate::endpoints::{
  Gateway, news::NewsEndpoints, stock::StockEndpoints, time_series::TimeSeriesEndpoints,
};
use crate::transport::{ApiRequest, Transport};
use governor::{Quota, RateLimiter};
use iex_core::{Config, Environment, Error, Result};
use serde_json::Value;
use std::num::NonZeroU32;
use std::sync::Arc;

/// Main IEX Cloud API client
///
/// Provides access to the endpoints the dashboard uses through organized
/// endpoint modules. Handles authentication, rate limiting, the optional
/// response cache and transport concerns.
///
/// # Examples
///
/// ```ignore
/// use iex_client::IexClient;
/// use iex_core::{Config, Period};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = IexClient::new(config)?;
///
///     let company = client.stock().company("MSFT").await?;
///     println!("{:?}", company.company_name);
///
///     let annual = client.time_series().valuations("MSFT", Period::Annual, 4).await?;
///     println!("latest P/E: {:?}", annual.first().and_then(|r| r.p_to_e));
///
///     Ok(())
/// }
/// ```
pub struct IexClient {
  gateway: Gateway,
  environment: Environment,
}

impl IexClient {
  /// Create a new IEX Cloud API client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created or the rate limit
  /// is zero.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Transport::new(&config)?;
    Self::from_parts(&config, transport)
  }

  /// Create a client whose responses are kept in a scoped cache
  pub fn with_cache(config: Config, cache_config: CacheConfig) -> Result<Self> {
    let cache = Arc::new(ResponseCache::new(cache_config));
    let transport = Transport::new(&config)?.with_cache(cache);
    Self::from_parts(&config, transport)
  }

  fn from_parts(config: &Config, transport: Transport) -> Result<Self> {
    let rate_limit = NonZeroU32::new(config.rate_limit)
      .ok_or_else(|| Error::Config("rate limit must be greater than zero".to_string()))?;
    let rate_limiter = Arc::new(RateLimiter::direct(Quota::per_second(rate_limit)));

    let gateway = Gateway::new(Arc::new(transport), rate_limiter);

    Ok(Self { gateway, environment: config.environment })
  }

  /// Quote, company, logo, statistics, dividends and holder endpoints
  pub fn stock(&self) -> StockEndpoints {
    StockEndpoints::new(self.gateway.clone())
  }

  /// Company news endpoints
  pub fn news(&self) -> NewsEndpoints {
    NewsEndpoints::new(self.gateway.clone())
  }

  /// Fundamentals and valuation time series
  pub fn time_series(&self) -> TimeSeriesEndpoints {
    TimeSeriesEndpoints::new(self.gateway.clone())
  }

  /// Raw read: any request, decoded JSON back, no model applied
  ///
  /// ```ignore
  /// let request = ApiRequest::new(Endpoint::Quote, "MSFT");
  /// let value = client.fetch(&request).await?;
  /// ```
  pub async fn fetch(&self, request: &ApiRequest) -> Result<Value> {
    self.gateway.get_json(request).await
  }

  /// Wait for rate limit to allow next request
  pub async fn wait_for_rate_limit(&self) -> Result<()> {
    self.gateway.wait().await;
    Ok(())
  }

  /// The scoped response cache, when the client was built with one
  pub fn cache(&self) -> Option<&Arc<ResponseCache>> {
    self.gateway.transport().cache()
  }

  pub fn environment(&self) -> Environment {
    self.environment
  }

  pub fn base_url(&self) -> &str {
    self.gateway.transport().base_url()
  }
}

impl std::fmt::Debug for IexClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("IexClient")
      .field("environment", &self.environment)
      .field("gateway", &self.gateway)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let config = Config::default_with_token("test_token".to_string());

    let client = IexClient::new(config).expect("Failed to create client");

    assert_eq!(client.environment(), Environment::Production);
    assert_eq!(client.base_url(), "https://cloud.iexapis.com/v1");
    assert!(client.cache().is_none());
  }

  #[test]
  fn test_sandbox_client_creation() {
    let config =
      Config::default_with_token("test_token".to_string()).with_environment(Environment::Sandbox);

    let client = IexClient::new(config).expect("Failed to create client");

    assert_eq!(client.base_url(), "https://sandbox.iexapis.com/v1");
  }

  #[test]
  fn test_zero_rate_limit_is_rejected() {
    let mut config = Config::default_with_token("test_token".to_string());
    config.rate_limit = 0;

    assert!(matches!(IexClient::new(config), Err(Error::Config(_))));
  }

  #[test]
  fn test_cached_client_exposes_cache() {
    let config = Config::default_with_token("test_token".to_string());

    let client = IexClient::with_cache(config, CacheConfig::default().with_ttl_secs(60)).unwrap();

    assert_eq!(client.cache().unwrap().config().ttl_secs, 60);
  }
}
