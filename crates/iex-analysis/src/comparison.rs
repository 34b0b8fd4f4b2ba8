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

//! Side-by-side comparison of up to four tickers

use crate::metrics::{TickerMetrics, extract};
use crate::source::FundamentalsSource;
use futures::stream::{self, StreamExt};
use iex_core::{Error, MAX_COMPARISON_TICKERS, Result, TickerSet};
use indicatif::ProgressBar;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Row labels of every comparison table, top to bottom
pub const ROW_LABELS: [&str; 9] = [
  "Symbol",
  "Price",
  "EV/Sales",
  "EV/EBITDA",
  "Market Cap",
  "P/E",
  "Gross Margin",
  "EBITDA Margin",
  "Net Income",
];

/// One table cell: the symbol header or a metric value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
  Text(String),
  Number(Decimal),
}

impl std::fmt::Display for Cell {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Cell::Text(text) => write!(f, "{}", text),
      Cell::Number(value) => write!(f, "{}", value),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
  pub label: &'static str,
  pub cells: Vec<Cell>,
}

/// Fixed rows in [`ROW_LABELS`] order, one column per ticker in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
  rows: Vec<ComparisonRow>,
}

impl ComparisonTable {
  pub fn rows(&self) -> &[ComparisonRow] {
    &self.rows
  }

  pub fn row(&self, label: &str) -> Option<&ComparisonRow> {
    self.rows.iter().find(|row| row.label == label)
  }

  /// Number of ticker columns (the label column is not counted)
  pub fn column_count(&self) -> usize {
    self.rows.first().map_or(0, |row| row.cells.len())
  }

  pub fn symbols(&self) -> Vec<String> {
    self
      .row(ROW_LABELS[0])
      .map(|row| row.cells.iter().map(Cell::to_string).collect())
      .unwrap_or_default()
  }
}

/// Lay out `metrics` as a comparison table, columns in the given order.
///
/// Accepts 1 to 4 tickers; no sorting, filtering or padding is applied.
pub fn build(metrics: &[TickerMetrics]) -> Result<ComparisonTable> {
  if metrics.is_empty() || metrics.len() > MAX_COMPARISON_TICKERS {
    return Err(Error::InvalidInput(format!(
      "a comparison takes 1 to {} tickers, got {}",
      MAX_COMPARISON_TICKERS,
      metrics.len()
    )));
  }

  fn numbers(metrics: &[TickerMetrics], f: fn(&TickerMetrics) -> Decimal) -> Vec<Cell> {
    metrics.iter().map(|m| Cell::Number(f(m))).collect()
  }

  let rows = vec![
    ComparisonRow {
      label: ROW_LABELS[0],
      cells: metrics.iter().map(|m| Cell::Text(m.symbol.clone())).collect(),
    },
    ComparisonRow { label: ROW_LABELS[1], cells: numbers(metrics, |m| m.price) },
    ComparisonRow { label: ROW_LABELS[2], cells: numbers(metrics, |m| m.ev_to_sales) },
    ComparisonRow { label: ROW_LABELS[3], cells: numbers(metrics, |m| m.ev_to_ebitda) },
    ComparisonRow { label: ROW_LABELS[4], cells: numbers(metrics, |m| m.market_cap) },
    ComparisonRow { label: ROW_LABELS[5], cells: numbers(metrics, |m| m.pe_ratio) },
    ComparisonRow { label: ROW_LABELS[6], cells: numbers(metrics, |m| m.gross_margin) },
    ComparisonRow { label: ROW_LABELS[7], cells: numbers(metrics, |m| m.ebitda_margin) },
    ComparisonRow { label: ROW_LABELS[8], cells: numbers(metrics, |m| m.net_income) },
  ];

  Ok(ComparisonTable { rows })
}

/// A ticker whose metrics could not be extracted
#[derive(Debug)]
pub struct TickerFailure {
  pub symbol: String,
  pub error: Error,
}

/// Outcome of [`compare`]: the table of the tickers that succeeded and the
/// failures, both in input order
#[derive(Debug)]
pub struct ComparisonReport {
  pub table: ComparisonTable,
  pub metrics: Vec<TickerMetrics>,
  pub failures: Vec<TickerFailure>,
}

impl ComparisonReport {
  pub fn is_complete(&self) -> bool {
    self.failures.is_empty()
  }
}

/// Extract every ticker of the set and lay them out side by side.
pub async fn compare<S>(source: &S, tickers: &TickerSet) -> Result<ComparisonReport>
where
  S: FundamentalsSource + ?Sized,
{
  compare_with_progress(source, tickers, None).await
}

/// [`compare`] that advances `progress` once per finished ticker.
///
/// Up to four extractions run at once; results are collected in input order
/// whatever order they finish in. Failing tickers are dropped from the table
/// and listed in `failures`. If every ticker fails, the first failure is
/// returned.
#[instrument(skip(source, tickers, progress), fields(tickers = tickers.len()))]
pub async fn compare_with_progress<S>(
  source: &S,
  tickers: &TickerSet,
  progress: Option<&ProgressBar>,
) -> Result<ComparisonReport>
where
  S: FundamentalsSource + ?Sized,
{
  let results = stream::iter(tickers.iter())
    .map(|symbol| async move {
      if let Some(pb) = progress {
        pb.set_message(format!("Processing {}", symbol));
      }
      let result = extract(source, symbol).await;
      if let Some(pb) = progress {
        pb.inc(1);
      }
      (symbol.clone(), result)
    })
    .buffered(MAX_COMPARISON_TICKERS)
    .collect::<Vec<_>>()
    .await;

  if let Some(pb) = progress {
    pb.finish_with_message("Comparison complete");
  }

  let mut metrics = Vec::new();
  let mut failures = Vec::new();
  for (symbol, result) in results {
    match result {
      Ok(m) => metrics.push(m),
      Err(error) => {
        warn!("Failed to extract metrics for {}: {}", symbol, error);
        failures.push(TickerFailure { symbol, error });
      }
    }
  }

  if metrics.is_empty() {
    return Err(match failures.into_iter().next() {
      Some(failure) => failure.error,
      None => Error::InvalidInput("no tickers to compare".to_string()),
    });
  }

  info!("Comparison complete: {} tickers, {} failures", metrics.len(), failures.len());

  Ok(ComparisonReport { table: build(&metrics)?, metrics, failures })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::FixtureSource;
  use iex_core::test_utils::{FundamentalsFixture, ValuationFixture};
  use std::str::FromStr;
  use std::time::Duration;

  fn metrics(symbol: &str, price: &str) -> TickerMetrics {
    TickerMetrics {
      symbol: symbol.to_string(),
      fiscal_year: Some(2021),
      price: Decimal::from_str(price).unwrap(),
      ev_to_sales: Decimal::new(123457, 4),
      ev_to_ebitda: Decimal::new(251235, 4),
      market_cap: Decimal::from(2_034_568),
      pe_ratio: Decimal::new(33123, 3),
      gross_margin: Decimal::new(6893, 4),
      ebitda_margin: Decimal::new(4877, 4),
      net_income: Decimal::from(61_271),
      enterprise_value: Decimal::from(1_987_654),
    }
  }

  fn ticker(source: FixtureSource, symbol: &str, price: f64) -> FixtureSource {
    source.with_ticker(
      symbol,
      &[ValuationFixture { price, ..Default::default() }],
      &[FundamentalsFixture::default()],
    )
  }

  #[test]
  fn test_build_two_columns() {
    let table = build(&[metrics("AAA", "10"), metrics("BBB", "20")]).unwrap();

    assert_eq!(table.column_count(), 2);
    assert_eq!(table.symbols(), vec!["AAA", "BBB"]);
    let prices: Vec<String> = table.row("Price").unwrap().cells.iter().map(Cell::to_string).collect();
    assert_eq!(prices, vec!["10", "20"]);
  }

  #[test]
  fn test_rows_are_fixed() {
    let table = build(&[metrics("AAA", "10")]).unwrap();
    let labels: Vec<&str> = table.rows().iter().map(|row| row.label).collect();
    assert_eq!(labels, ROW_LABELS.to_vec());
  }

  #[test]
  fn test_each_row_has_one_cell_per_ticker() {
    for n in 1..=4 {
      let inputs: Vec<TickerMetrics> = (0..n).map(|i| metrics(&format!("T{}", i), "1")).collect();
      let table = build(&inputs).unwrap();
      assert!(table.rows().iter().all(|row| row.cells.len() == n));
    }
  }

  #[test]
  fn test_ebitda_margin_row_holds_margin() {
    let table = build(&[metrics("AAA", "10")]).unwrap();
    assert_eq!(table.row("EBITDA Margin").unwrap().cells, vec![Cell::Number(Decimal::new(4877, 4))]);
    assert_eq!(table.row("Net Income").unwrap().cells, vec![Cell::Number(Decimal::from(61_271))]);
  }

  #[test]
  fn test_build_is_idempotent() {
    let inputs = [metrics("AAA", "10"), metrics("BBB", "20")];
    assert_eq!(build(&inputs).unwrap(), build(&inputs).unwrap());
  }

  #[test]
  fn test_build_rejects_bad_counts() {
    assert!(matches!(build(&[]), Err(Error::InvalidInput(_))));
    let five: Vec<TickerMetrics> = (0..5).map(|i| metrics(&format!("T{}", i), "1")).collect();
    assert!(matches!(build(&five), Err(Error::InvalidInput(_))));
  }

  #[tokio::test]
  async fn test_compare_keeps_input_order() {
    let source = ticker(ticker(ticker(FixtureSource::new(), "AAA", 10.0), "BBB", 20.0), "CCC", 30.0)
      .with_delay("AAA", Duration::from_millis(50));
    let tickers = TickerSet::from_symbols(["aaa", "bbb", "ccc"]).unwrap();

    let report = compare(&source, &tickers).await.unwrap();

    assert!(report.is_complete());
    assert_eq!(report.table.symbols(), vec!["AAA", "BBB", "CCC"]);
  }

  #[tokio::test]
  async fn test_compare_reports_failures() {
    let source = ticker(ticker(FixtureSource::new(), "AAA", 10.0), "CCC", 30.0);
    let tickers = TickerSet::from_symbols(["AAA", "ZZZZ", "CCC"]).unwrap();

    let report = compare(&source, &tickers).await.unwrap();

    assert_eq!(report.table.symbols(), vec!["AAA", "CCC"]);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].symbol, "ZZZZ");
    assert!(matches!(report.failures[0].error, Error::UnknownSymbol(_)));
  }

  #[tokio::test]
  async fn test_compare_all_failed_returns_first_error() {
    let source = FixtureSource::new().with_ticker("EMPT", &[], &[]);
    let tickers = TickerSet::from_symbols(["EMPT", "ZZZZ"]).unwrap();

    let result = compare(&source, &tickers).await;

    assert!(matches!(result, Err(Error::MissingData(_))));
  }

  #[tokio::test]
  async fn test_compare_advances_progress() {
    let source = ticker(ticker(FixtureSource::new(), "AAA", 10.0), "BBB", 20.0);
    let tickers = TickerSet::from_symbols(["AAA", "BBB"]).unwrap();
    let pb = ProgressBar::hidden();
    pb.set_length(tickers.len() as u64);

    compare_with_progress(&source, &tickers, Some(&pb)).await.unwrap();

    assert_eq!(pb.position(), 2);
    assert!(pb.is_finished());
  }
}
