//! # iex-core
//!
//! Shared building blocks for the iex-* crates: the error taxonomy, the
//! environment-driven configuration, the catalogue of IEX Cloud endpoints and
//! the small value types (periods, views, ticker sets) that flow between the
//! client, the analysis layer and the command line front end.

pub mod config;
pub mod error;
pub mod types;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use config::{Config, Environment};
pub use error::{Error, Result};
pub use types::{DividendRange, Period, TickerSet, View, normalize_symbol};

/// The IEX Cloud resources used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Endpoint {
  // stock/{symbol}/...
  Logo,
  Quote,
  Company,
  News,
  AdvancedStats,
  Dividends,
  InstitutionalOwnership,
  InsiderTransactions,

  // time-series/{id}/{symbol}/{period}
  Fundamentals,
  FundamentalValuations,
}

impl Endpoint {
  /// Leading path segment(s) of the resource.
  pub fn resource(&self) -> &'static str {
    match self {
      Endpoint::Fundamentals => "time-series/fundamentals",
      Endpoint::FundamentalValuations => "time-series/FUNDAMENTAL_VALUATIONS",
      _ => "stock",
    }
  }

  /// Sub-resource placed after the symbol, if any.
  ///
  /// Time-series endpoints have none; their trailing segment is the period.
  pub fn sub_resource(&self) -> Option<&'static str> {
    match self {
      Endpoint::Logo => Some("logo"),
      Endpoint::Quote => Some("quote"),
      Endpoint::Company => Some("company"),
      Endpoint::News => Some("news/last"),
      Endpoint::AdvancedStats => Some("advanced-stats"),
      Endpoint::Dividends => Some("dividends"),
      Endpoint::InstitutionalOwnership => Some("institutional-ownership"),
      Endpoint::InsiderTransactions => Some("insider-transactions"),
      Endpoint::Fundamentals | Endpoint::FundamentalValuations => None,
    }
  }

  /// Whether the resource is one of the `time-series` datasets.
  pub fn is_time_series(&self) -> bool {
    matches!(self, Endpoint::Fundamentals | Endpoint::FundamentalValuations)
  }
}

impl std::fmt::Display for Endpoint {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Endpoint::Logo => write!(f, "LOGO"),
      Endpoint::Quote => write!(f, "QUOTE"),
      Endpoint::Company => write!(f, "COMPANY"),
      Endpoint::News => write!(f, "NEWS"),
      Endpoint::AdvancedStats => write!(f, "ADVANCED_STATS"),
      Endpoint::Dividends => write!(f, "DIVIDENDS"),
      Endpoint::InstitutionalOwnership => write!(f, "INSTITUTIONAL_OWNERSHIP"),
      Endpoint::InsiderTransactions => write!(f, "INSIDER_TRANSACTIONS"),
      Endpoint::Fundamentals => write!(f, "FUNDAMENTALS"),
      Endpoint::FundamentalValuations => write!(f, "FUNDAMENTAL_VALUATIONS"),
    }
  }
}

/// Base URL for the IEX Cloud production API
pub const IEX_PRODUCTION_BASE_URL: &str = "https://cloud.iexapis.com/v1";

/// Base URL for the IEX Cloud sandbox API (scrambled test data)
pub const IEX_SANDBOX_BASE_URL: &str = "https://sandbox.iexapis.com/v1";

/// Requests per second allowed by the provider
pub const DEFAULT_RATE_LIMIT: u32 = 100;

/// Per-request timeout applied when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Number of tickers a comparison view can hold (primary + 3)
pub const MAX_COMPARISON_TICKERS: usize = 4;

/// Default number of articles for the news view
pub const DEFAULT_NEWS_LAST: u32 = 10;

/// Default number of periods requested from the time-series endpoints
pub const DEFAULT_SERIES_LAST: u32 = 4;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_endpoint_paths() {
    assert_eq!(Endpoint::Quote.resource(), "stock");
    assert_eq!(Endpoint::Quote.sub_resource(), Some("quote"));
    assert_eq!(Endpoint::News.sub_resource(), Some("news/last"));
    assert_eq!(Endpoint::FundamentalValuations.resource(), "time-series/FUNDAMENTAL_VALUATIONS");
    assert_eq!(Endpoint::Fundamentals.sub_resource(), None);
  }

  #[test]
  fn test_time_series_flag() {
    assert!(Endpoint::Fundamentals.is_time_series());
    assert!(Endpoint::FundamentalValuations.is_time_series());
    assert!(!Endpoint::AdvancedStats.is_time_series());
  }

  #[test]
  fn test_endpoint_display() {
    assert_eq!(Endpoint::InsiderTransactions.to_string(), "INSIDER_TRANSACTIONS");
    assert_eq!(Endpoint::FundamentalValuations.to_string(), "FUNDAMENTAL_VALUATIONS");
  }
}
