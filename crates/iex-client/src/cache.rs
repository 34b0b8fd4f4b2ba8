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

//! Scoped response cache.
//!
//! A `ResponseCache` belongs to one client instance. Entries are keyed by the
//! full [`ApiRequest`] (endpoint, symbol, trailing segment, query parameters),
//! expire after the configured TTL and can be dropped by the caller one
//! request, one symbol or all at once.
//!
//! ```rust,ignore
//! use iex_client::{CacheConfig, IexClient};
//!
//! let client = IexClient::with_cache(config, CacheConfig::default().with_ttl_secs(60))?;
//! let quote = client.stock().quote("MSFT").await?;   // network
//! let quote = client.stock().quote("MSFT").await?;   // cache hit
//! client.cache().unwrap().invalidate_symbol("MSFT").await;
//! ```

use crate::transport::ApiRequest;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};

/// Cache behaviour switches
#[derive(Debug, Clone)]
pub struct CacheConfig {
  /// Enable caching
  pub enable_cache: bool,
  /// Entry lifetime in seconds; 0 makes every entry stale immediately
  pub ttl_secs: u64,
  /// Force refresh (bypass cache reads, but still write)
  pub force_refresh: bool,
}

impl Default for CacheConfig {
  fn default() -> Self {
    Self { enable_cache: true, ttl_secs: 300, force_refresh: false }
  }
}

impl CacheConfig {
  /// Builder: set enable_cache
  pub fn with_enabled(mut self, enabled: bool) -> Self {
    self.enable_cache = enabled;
    self
  }

  /// Builder: set force_refresh
  pub fn with_force_refresh(mut self, force: bool) -> Self {
    self.force_refresh = force;
    self
  }

  /// Builder: set ttl_secs
  pub fn with_ttl_secs(mut self, secs: u64) -> Self {
    self.ttl_secs = secs;
    self
  }

  pub fn ttl(&self) -> Duration {
    Duration::from_secs(self.ttl_secs)
  }
}

/// Result of a cache get operation
#[derive(Debug)]
pub enum CacheResult<T> {
  /// Cache hit with data
  Hit(T),
  /// No entry, or the entry expired
  Miss,
  /// Cache disabled or force refresh
  Skipped,
}

impl<T> CacheResult<T> {
  /// Returns true if this is a cache hit
  pub fn is_hit(&self) -> bool {
    matches!(self, CacheResult::Hit(_))
  }

  /// Returns true if cache was actually checked (not skipped)
  pub fn was_checked(&self) -> bool {
    !matches!(self, CacheResult::Skipped)
  }

  /// Convert to Option, returning None for non-hits
  pub fn into_option(self) -> Option<T> {
    match self {
      CacheResult::Hit(data) => Some(data),
      _ => None,
    }
  }
}

#[derive(Debug)]
struct CachedResponse {
  stored_at: Instant,
  value: Value,
}

/// In-memory response cache owned by a client
#[derive(Debug)]
pub struct ResponseCache {
  config: CacheConfig,
  entries: RwLock<HashMap<ApiRequest, CachedResponse>>,
}

impl ResponseCache {
  pub fn new(config: CacheConfig) -> Self {
    Self { config, entries: RwLock::new(HashMap::new()) }
  }

  /// Get the cache configuration
  pub fn config(&self) -> &CacheConfig {
    &self.config
  }

  /// Check if reads are served (enabled and not force refresh)
  pub fn is_read_enabled(&self) -> bool {
    self.config.enable_cache && !self.config.force_refresh
  }

  /// Check if caching is enabled for writes
  pub fn is_write_enabled(&self) -> bool {
    self.config.enable_cache
  }

  fn is_fresh(&self, entry: &CachedResponse) -> bool {
    entry.stored_at.elapsed() < self.config.ttl()
  }

  pub async fn get(&self, request: &ApiRequest) -> CacheResult<Value> {
    if !self.is_read_enabled() {
      return CacheResult::Skipped;
    }

    let entries = self.entries.read().await;
    match entries.get(request) {
      Some(entry) if self.is_fresh(entry) => {
        info!("Cache hit for {}", request);
        CacheResult::Hit(entry.value.clone())
      }
      Some(_) => {
        debug!("Cache entry expired for {}", request);
        CacheResult::Miss
      }
      None => {
        debug!("Cache miss for {}", request);
        CacheResult::Miss
      }
    }
  }

  /// Store a response. Returns false when writes are disabled.
  pub async fn set(&self, request: &ApiRequest, value: Value) -> bool {
    if !self.is_write_enabled() {
      return false;
    }

    let mut entries = self.entries.write().await;
    entries.insert(request.clone(), CachedResponse { stored_at: Instant::now(), value });
    debug!("Cached {} (ttl {}s)", request, self.config.ttl_secs);
    true
  }

  /// Drop one request's entry
  pub async fn invalidate(&self, request: &ApiRequest) -> bool {
    self.entries.write().await.remove(request).is_some()
  }

  /// Drop every entry of a symbol, whatever the endpoint
  pub async fn invalidate_symbol(&self, symbol: &str) -> usize {
    let symbol = symbol.trim().to_ascii_uppercase();
    let mut entries = self.entries.write().await;
    let before = entries.len();
    entries.retain(|request, _| request.symbol != symbol);
    let removed = before - entries.len();
    if removed > 0 {
      info!("Invalidated {} cached responses for {}", removed, symbol);
    }
    removed
  }

  /// Drop everything
  pub async fn clear(&self) -> usize {
    let mut entries = self.entries.write().await;
    let removed = entries.len();
    entries.clear();
    removed
  }

  /// Remove expired entries. Returns the number of entries deleted.
  pub async fn cleanup_expired(&self) -> usize {
    let ttl = self.config.ttl();
    let mut entries = self.entries.write().await;
    let before = entries.len();
    entries.retain(|_, entry| entry.stored_at.elapsed() < ttl);
    let removed = before - entries.len();
    if removed > 0 {
      info!("Cleaned up {} expired cache entries", removed);
    }
    removed
  }

  pub async fn len(&self) -> usize {
    self.entries.read().await.len()
  }

  pub async fn is_empty(&self) -> bool {
    self.entries.read().await.is_empty()
  }
}
