//! # iex-analysis
//!
//! Turns IEX Cloud time series into the dashboard's analytical views:
//!
//! - [`extract`]: latest annual valuation and fundamentals of one ticker as
//!   [`TickerMetrics`], rounded half-to-even
//! - [`build`] / [`compare`]: side-by-side [`ComparisonTable`] of 1 to 4 tickers
//! - [`revenue_growth`] / [`ut_analysis`]: year-over-year revenue growth
//! - [`export`]: CSV sheets and base64 download links
//!
//! Everything that talks to the network goes through [`FundamentalsSource`],
//! implemented for `iex_client::IexClient`.

pub mod comparison;
pub mod export;
pub mod growth;
pub mod metrics;
pub mod numeric;
pub mod source;
pub mod ut_analysis;

#[cfg(test)]
mod testing;

pub use comparison::{
  Cell, ComparisonReport, ComparisonRow, ComparisonTable, ROW_LABELS, TickerFailure, build,
  compare, compare_with_progress,
};
pub use export::{DEFAULT_EXPORT_NAME, Sheet, ToSheet, download_link};
pub use growth::{GROWTH_PERIODS, RevenueGrowth, revenue_growth};
pub use metrics::{TickerMetrics, extract};
pub use source::FundamentalsSource;
pub use ut_analysis::{UtAnalysis, ValuationOverview, ut_analysis};
