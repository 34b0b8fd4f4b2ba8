//! # iex-client
//!
//! A pure IEX Cloud API client for Rust.
//!
//! ## Features
//!
//! - **Async/Await**: Built on tokio and reqwest
//! - **Rate Limiting**: Client-side limiter sized from the configuration
//! - **Type Safe**: Responses decode into iex-models structs, or raw JSON via `fetch`
//! - **Scoped Cache**: Opt-in per-client response cache with TTL and invalidation
//! - **Bounded**: Every request carries a timeout (10 seconds unless configured)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use iex_client::IexClient;
//! use iex_core::{Config, Period};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = IexClient::new(config)?;
//!
//!     let quote = client.stock().quote("MSFT").await?;
//!     println!("Latest price: {:?}", quote.latest_price);
//!
//!     let annual = client.time_series().fundamentals("MSFT", Period::Annual, 4).await?;
//!     println!("Reported periods: {}", annual.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, iex_core::Error>`. Transport failures and
//! timeouts are `Error::Network`, unparseable bodies are `Error::Decode`.
//! Nothing is retried unless `max_retries` is raised in the configuration.

#![deny(missing_docs)]
#![warn(clippy::all)]

#[allow(missing_docs)]
pub mod cache;
#[allow(missing_docs)]
pub mod client;
#[allow(missing_docs)]
pub mod endpoints;
#[allow(missing_docs)]
pub mod transport;

// Re-export the main client and common types
pub use cache::{CacheConfig, CacheResult, ResponseCache};
pub use client::IexClient;
pub use iex_core::{Config, Endpoint, Environment, Error, Period, Result};
pub use transport::ApiRequest;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  news::NewsEndpoints, stock::StockEndpoints, time_series::TimeSeriesEndpoints,
};
