//! HTTP transport layer for IEX Cloud API requests

use crate::cache::ResponseCache;
use iex_core::{Config, Endpoint, Error, Result, normalize_symbol};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// One read against the API: endpoint, symbol, trailing path segment and
/// query parameters. The token is added by the transport and is not part of
/// the request, so requests double as cache keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiRequest {
  pub endpoint: Endpoint,
  pub symbol: String,
  pub segment: Option<String>,
  pub query: BTreeMap<String, String>,
}

impl ApiRequest {
  pub fn new(endpoint: Endpoint, symbol: &str) -> Self {
    Self {
      endpoint,
      symbol: normalize_symbol(symbol).unwrap_or_default(),
      segment: None,
      query: BTreeMap::new(),
    }
  }

  /// Trailing path segment: the period of a time series, `last` of the news
  /// endpoint, the range of the dividends endpoint.
  pub fn with_segment(mut self, segment: impl ToString) -> Self {
    self.segment = Some(segment.to_string());
    self
  }

  pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
    self.query.insert(key.to_string(), value.to_string());
    self
  }

  /// Path below the base URL, e.g. `stock/MSFT/news/last/10`
  pub fn path(&self) -> String {
    self.path_segments().join("/")
  }

  fn path_segments(&self) -> Vec<&str> {
    let mut segments: Vec<&str> = self.endpoint.resource().split('/').collect();
    segments.push(&self.symbol);
    if let Some(sub) = self.endpoint.sub_resource() {
      segments.extend(sub.split('/'));
    }
    if let Some(segment) = &self.segment {
      segments.push(segment);
    }
    segments
  }
}

impl std::fmt::Display for ApiRequest {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.path())?;
    for (i, (key, value)) in self.query.iter().enumerate() {
      write!(f, "{}{}={}", if i == 0 { '?' } else { '&' }, key, value)?;
    }
    Ok(())
  }
}

/// HTTP transport layer for making requests to the IEX Cloud API
pub struct Transport {
  client: Client,
  base_url: String,
  api_token: String,
  timeout: Duration,
  max_retries: u32,
  cache: Option<Arc<ResponseCache>>,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent("iex-client/0.1.0")
      .build()
      .map_err(|e| Error::Network(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self {
      client,
      base_url: config.base_url.clone(),
      api_token: config.api_token.clone(),
      timeout,
      max_retries: config.max_retries,
      cache: None,
    })
  }

  /// Attach a response cache shared with the owning client
  pub fn with_cache(mut self, cache: Arc<ResponseCache>) -> Self {
    self.cache = Some(cache);
    self
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: "https://mock.iexapis.com/v1".to_string(),
      api_token: "test_token".to_string(),
      timeout: Duration::from_secs(10),
      max_retries: 0,
      cache: None,
    }
  }

  /// Decode a JSON body into a typed model
  pub fn decode<T>(request: &ApiRequest, value: Value) -> Result<T>
  where
    T: DeserializeOwned,
  {
    serde_json::from_value(value).map_err(|e| {
      error!("Response for {} does not match the expected model: {}", request, e);
      Error::Decode(format!("{} for {}: {}", request.endpoint, request.symbol, e))
    })
  }

  /// Fresh cached body for `request`, when a cache is attached and holds one
  pub async fn cached(&self, request: &ApiRequest) -> Option<Value> {
    match &self.cache {
      Some(cache) => cache.get(request).await.into_option(),
      None => None,
    }
  }

  /// Fetch a response as raw JSON from the network and store it in the cache
  /// when one is attached
  #[instrument(skip(self), fields(endpoint = %request.endpoint, symbol = %request.symbol))]
  pub async fn fetch_and_store(&self, request: &ApiRequest) -> Result<Value> {
    let value = self.fetch(request).await?;

    if let Some(cache) = &self.cache {
      cache.set(request, value.clone()).await;
    }

    Ok(value)
  }

  async fn fetch(&self, request: &ApiRequest) -> Result<Value> {
    let url = self.build_url(request)?;
    debug!("Making request to: {}", request);

    let mut attempt = 0;
    loop {
      if attempt > 0 {
        let delay = Duration::from_millis(2_u64.pow(attempt) * 500); // Exponential backoff
        warn!("Retrying {} in {}ms (attempt {})", request, delay.as_millis(), attempt + 1);
        tokio::time::sleep(delay).await;
      }

      match self.make_request(&url).await {
        Ok(text) => return Self::parse_body(request, &text),
        Err(Error::Network(msg)) if attempt < self.max_retries => {
          warn!("Request failed (attempt {}): {}", attempt + 1, msg);
          attempt += 1;
        }
        Err(e) => return Err(e),
      }
    }
  }

  fn parse_body(request: &ApiRequest, text: &str) -> Result<Value> {
    debug!("Response body length: {} bytes", text.len());
    #[cfg(feature = "debug-logging")]
    tracing::trace!("Response body for {}: {}", request, text);

    match serde_json::from_str::<Value>(text) {
      Ok(value) => {
        info!("Successfully parsed response for {}", request);
        Ok(value)
      }
      Err(e) => {
        let preview: String = text.chars().take(200).collect();
        error!("Failed to parse JSON response: {}", e);
        error!("Response text (first 200 chars): {}", preview);
        Err(Error::Decode(format!("Failed to parse response: {}. Response: {}", e, preview)))
      }
    }
  }

  /// Build the full URL for an API request
  fn build_url(&self, request: &ApiRequest) -> Result<Url> {
    if request.symbol.is_empty() {
      return Err(Error::InvalidInput(format!("{} request without a symbol", request.endpoint)));
    }

    let mut url =
      Url::parse(&self.base_url).map_err(|e| Error::Config(format!("Invalid base URL: {}", e)))?;

    url
      .path_segments_mut()
      .map_err(|_| Error::Config(format!("Base URL cannot take a path: {}", self.base_url)))?
      .pop_if_empty()
      .extend(request.path_segments());

    {
      let mut query_pairs = url.query_pairs_mut();
      for (key, value) in &request.query {
        query_pairs.append_pair(key, value);
      }
      query_pairs.append_pair("token", &self.api_token);
    }

    Ok(url)
  }

  /// Make the actual HTTP request and return the body of a 2xx response
  async fn make_request(&self, url: &Url) -> Result<String> {
    let response = self.client.get(url.clone()).send().await.map_err(|e| {
      if e.is_timeout() {
        Error::Network(format!("Request timed out after {}s", self.timeout.as_secs()))
      } else {
        Error::Network(format!("Request failed: {}", e.without_url()))
      }
    })?;

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Network(format!("Failed to read response body: {}", e.without_url())))?;

    if status.is_success() {
      debug!("Request successful with status: {}", status);
      Ok(text)
    } else {
      error!("Request failed with status: {}", status);
      Err(Self::status_error(status, &text, url))
    }
  }

  /// Map a non-success status onto the error taxonomy
  fn status_error(status: StatusCode, body: &str, url: &Url) -> Error {
    let message: String = body.trim().chars().take(200).collect();
    match status {
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::ApiToken(message),
      StatusCode::PAYMENT_REQUIRED | StatusCode::TOO_MANY_REQUESTS => Error::RateLimit(message),
      StatusCode::NOT_FOUND => Error::UnknownSymbol(format!("{} ({})", url.path(), message)),
      _ => Error::Api { status: status.as_u16(), message },
    }
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }

  pub fn cache(&self) -> Option<&Arc<ResponseCache>> {
    self.cache.as_ref()
  }
}

impl std::fmt::Debug for Transport {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("timeout", &self.timeout)
      .field("max_retries", &self.max_retries)
      .field("cache", &self.cache.is_some())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use iex_core::Period;

  #[test]
  fn test_build_url_stock_endpoint() {
    let transport = Transport::new_mock();
    let request = ApiRequest::new(Endpoint::Quote, "msft");

    let url = transport.build_url(&request).unwrap();

    assert_eq!(url.as_str(), "https://mock.iexapis.com/v1/stock/MSFT/quote?token=test_token");
  }

  #[test]
  fn test_build_url_time_series() {
    let transport = Transport::new_mock();
    let request = ApiRequest::new(Endpoint::FundamentalValuations, "AAPL")
      .with_segment(Period::Annual)
      .with_query("last", 4);

    let url = transport.build_url(&request).unwrap();

    assert_eq!(
      url.as_str(),
      "https://mock.iexapis.com/v1/time-series/FUNDAMENTAL_VALUATIONS/AAPL/annual?last=4&token=test_token"
    );
  }

  #[test]
  fn test_build_url_news() {
    let transport = Transport::new_mock();
    let request = ApiRequest::new(Endpoint::News, "IBM").with_segment(10);

    let url = transport.build_url(&request).unwrap();

    assert!(url.as_str().starts_with("https://mock.iexapis.com/v1/stock/IBM/news/last/10?"));
  }

  #[test]
  fn test_symbol_is_path_encoded() {
    let transport = Transport::new_mock();
    let request = ApiRequest::new(Endpoint::Quote, "BRK/B");

    let url = transport.build_url(&request).unwrap();

    assert!(url.path().contains("BRK%2FB"));
  }

  #[test]
  fn test_empty_symbol_rejected() {
    let transport = Transport::new_mock();
    let request = ApiRequest::new(Endpoint::Quote, "  ");

    assert!(matches!(transport.build_url(&request), Err(Error::InvalidInput(_))));
  }

  #[test]
  fn test_request_display_has_no_token() {
    let request = ApiRequest::new(Endpoint::Fundamentals, "msft")
      .with_segment(Period::Quarterly)
      .with_query("last", 4);
    assert_eq!(request.to_string(), "time-series/fundamentals/MSFT/quarterly?last=4");
  }

  #[test]
  fn test_status_mapping() {
    let url = Url::parse("https://mock.iexapis.com/v1/stock/ZZZZ/quote").unwrap();
    assert!(matches!(
      Transport::status_error(StatusCode::UNAUTHORIZED, "bad token", &url),
      Error::ApiToken(_)
    ));
    assert!(matches!(
      Transport::status_error(StatusCode::PAYMENT_REQUIRED, "quota", &url),
      Error::RateLimit(_)
    ));
    assert!(matches!(
      Transport::status_error(StatusCode::NOT_FOUND, "Unknown symbol", &url),
      Error::UnknownSymbol(_)
    ));
    assert!(matches!(
      Transport::status_error(StatusCode::BAD_GATEWAY, "", &url),
      Error::Api { status: 502, .. }
    ));
  }

  #[test]
  fn test_parse_body_rejects_html() {
    let request = ApiRequest::new(Endpoint::Quote, "MSFT");
    let result = Transport::parse_body(&request, "<html>Service Unavailable</html>");
    assert!(matches!(result, Err(Error::Decode(_))));
  }
}
