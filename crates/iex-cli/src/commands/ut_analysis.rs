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
use iex_analysis::{ToSheet, UtAnalysis, ut_analysis};
use prettytable::{Row, Table, row};

#[derive(Args, Debug)]
pub struct UtAnalysisArgs {
  /// Ticker symbol
  pub symbol: String,

  #[command(flatten)]
  pub export: ExportArgs,
}

pub async fn execute(args: UtAnalysisArgs, config: &Config) -> Result<()> {
  let client = config.client()?;
  let analysis = ut_analysis(&client, &args.symbol)
    .await
    .with_context(|| format!("UT analysis failed for {}", args.symbol))?;

  println!("Key Financial Metrics (in millions)");
  println!("Valuation Overview (LFY)");
  valuation_table(&analysis).printstd();
  println!();
  println!("Revenue Growth:");
  growth_table(&analysis).printstd();

  export_sheet(&analysis.to_sheet(), &args.export, config)?;
  Ok(())
}

fn valuation_table(analysis: &UtAnalysis) -> Table {
  let m = &analysis.overview;
  let mut table = Table::new();
  table.add_row(row!["EV/Sales:", m.ev_to_sales, "Price:", m.price]);
  table.add_row(row!["P/E:", m.pe_ratio, "M.Cap:", m.market_cap]);
  table.add_row(row!["Net Income:", m.net_income, "EV:", m.enterprise_value]);
  table
}

fn growth_table(analysis: &UtAnalysis) -> Table {
  let mut years = vec!["Fiscal Year:".to_string()];
  let mut revenue = vec!["Total Revenue:".to_string()];
  let mut growth = vec!["Growth:".to_string()];
  for entry in &analysis.growth {
    years.push(entry.fiscal_year.map(|y| y.to_string()).unwrap_or_default());
    revenue.push(entry.revenue.to_string());
    growth.push(format!("{}%", entry.growth_pct));
  }

  let mut table = Table::new();
  for cells in [years, revenue, growth] {
    table.add_row(Row::from(cells));
  }
  table
}
