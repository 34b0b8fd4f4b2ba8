pub mod news;
pub mod stock;
pub mod time_series;

use crate::transport::{ApiRequest, Transport};
use governor::{
  RateLimiter,
  clock::DefaultClock,
  middleware::NoOpMiddleware,
  state::{InMemoryState, NotKeyed},
};
use iex_core::Result;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Direct (un-keyed) limiter shared by every endpoint of one client
pub type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Rate-limited door to the transport.
///
/// One client hands clones of the same gateway to all of its endpoint groups,
/// so every network request, typed or raw, draws from a single quota.
#[derive(Clone)]
pub struct Gateway {
  transport: Arc<Transport>,
  rate_limiter: Arc<DirectRateLimiter>,
}

impl Gateway {
  pub fn new(transport: Arc<Transport>, rate_limiter: Arc<DirectRateLimiter>) -> Self {
    Self { transport, rate_limiter }
  }

  /// Block until the quota admits one more request
  pub async fn wait(&self) {
    self.rate_limiter.until_ready().await;
  }

  /// Fetch and decode into `T`; see [`Gateway::get_json`]
  pub async fn get<T: DeserializeOwned>(&self, request: &ApiRequest) -> Result<T> {
    let value = self.get_json(request).await?;
    Transport::decode(request, value)
  }

  /// Body of `request` as untyped JSON.
  ///
  /// Cache hits are answered without touching the quota; only network
  /// requests wait for the rate limiter.
  pub async fn get_json(&self, request: &ApiRequest) -> Result<Value> {
    if let Some(value) = self.transport.cached(request).await {
      return Ok(value);
    }
    self.wait().await;
    self.transport.fetch_and_store(request).await
  }

  pub fn transport(&self) -> &Arc<Transport> {
    &self.transport
  }
}

impl std::fmt::Debug for Gateway {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Gateway")
      .field("transport", &self.transport)
      .field("rate_limiter", &"RateLimiter")
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::cache::{CacheConfig, ResponseCache};
  use governor::Quota;
  use iex_core::Endpoint;
  use iex_models::stock::Logo;
  use serde_json::json;
  use std::num::NonZeroU32;

  fn gateway(per_second: u32) -> (Gateway, Arc<Transport>) {
    let transport = Arc::new(Transport::new_mock());
    let quota = Quota::per_second(NonZeroU32::new(per_second).unwrap());
    (Gateway::new(transport.clone(), Arc::new(RateLimiter::direct(quota))), transport)
  }

  #[tokio::test]
  async fn test_clones_share_one_transport() {
    let (gateway, transport) = gateway(100);

    let clone = gateway.clone();

    clone.wait().await;
    assert!(Arc::ptr_eq(clone.transport(), &transport));
    assert_eq!(clone.transport().base_url(), "https://mock.iexapis.com/v1");
  }

  #[tokio::test]
  async fn test_clones_draw_from_the_same_quota() {
    let (gateway, _) = gateway(1);
    let other = gateway.clone();

    gateway.wait().await;

    assert!(other.rate_limiter.check().is_err());
  }

  #[tokio::test]
  async fn test_cache_hits_leave_the_quota_alone() {
    let cache = Arc::new(ResponseCache::new(CacheConfig::default()));
    let transport = Arc::new(Transport::new_mock().with_cache(cache.clone()));
    let quota = Quota::per_second(NonZeroU32::new(1).unwrap());
    let gateway = Gateway::new(transport, Arc::new(RateLimiter::direct(quota)));
    let request = ApiRequest::new(Endpoint::Logo, "MSFT");
    cache.set(&request, json!({"url": "https://example.com/msft.png"})).await;

    let first: Logo = gateway.get(&request).await.unwrap();
    let second = gateway.get_json(&request).await.unwrap();

    assert_eq!(first.url.as_deref(), Some("https://example.com/msft.png"));
    assert_eq!(second["url"], json!("https://example.com/msft.png"));
    assert!(gateway.rate_limiter.check().is_ok());
  }
}
