//! # iex-models
//!
//! Data models for IEX Cloud API responses.
//!
//! The provider returns camelCase JSON in which almost any value may be
//! `null` or absent depending on the security and the data plan, so numeric
//! and text fields are modelled as `Option`s and every struct falls back to
//! its `Default` for missing keys. Checking that a value a computation needs
//! is actually present is left to the consumer (see `iex-analysis`).
//!
//! ## Usage
//!
//! ```ignore
//! use iex_models::fundamentals::ValuationRecord;
//!
//! let series: Vec<ValuationRecord> = serde_json::from_str(&response_json)?;
//! let latest = series.first();
//! ```

#![warn(clippy::all)]

pub mod fundamentals;
pub mod news;
pub mod ownership;
pub mod stock;

pub use fundamentals::*;
pub use news::*;
pub use ownership::*;
pub use stock::*;
