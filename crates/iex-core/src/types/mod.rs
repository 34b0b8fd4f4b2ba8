//! Common types used across iex-* crates

pub mod common;
pub mod ticker;

pub use common::{DividendRange, Period, View};
pub use ticker::{TickerSet, normalize_symbol};
