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

use crate::commands::{ExportArgs, export_sheet};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use iex_analysis::{ComparisonReport, ComparisonTable, ToSheet, compare_with_progress};
use iex_core::TickerSet;
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{Cell, Row, Table};
use tracing::info;

#[derive(Args, Debug)]
pub struct CompareArgs {
  /// Primary ticker followed by up to three more
  #[arg(required = true, num_args = 1..=4)]
  pub symbols: Vec<String>,

  #[command(flatten)]
  pub export: ExportArgs,
}

pub async fn execute(args: CompareArgs, config: &Config) -> Result<()> {
  let tickers = TickerSet::from_symbols(&args.symbols).context("Invalid ticker selection")?;
  let client = config.client()?;

  let progress = ProgressBar::new(tickers.len() as u64);
  progress.set_style(
    ProgressStyle::default_bar()
      .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>3}/{len:3} {msg}")
      .context("Invalid progress bar template")?
      .progress_chars("##-"),
  );

  let report = compare_with_progress(&client, &tickers, Some(&progress))
    .await
    .context("Comparison failed for every ticker")?;

  println!("Valuation and Margins (LFY):");
  table(&report.table).printstd();
  print_failures(&report);

  export_sheet(&report.table.to_sheet(), &args.export, config)?;
  info!("Compared {} of {} tickers", report.metrics.len(), tickers.len());
  Ok(())
}

fn table(comparison: &ComparisonTable) -> Table {
  let mut table = Table::new();
  for row in comparison.rows() {
    let mut cells = vec![Cell::new(&format!("{}:", row.label))];
    cells.extend(row.cells.iter().map(|cell| Cell::new(&cell.to_string())));
    table.add_row(Row::new(cells));
  }
  table
}

fn print_failures(report: &ComparisonReport) {
  for failure in &report.failures {
    eprintln!("{}: {}", failure.symbol, failure.error);
  }
}
