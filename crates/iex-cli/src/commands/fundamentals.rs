use crate::commands::{format_number, or_dash};
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use iex_core::{DEFAULT_SERIES_LAST, Period};
use iex_models::fundamentals::FundamentalsRecord;
use iex_models::stock::AdvancedStats;
use prettytable::{Table, row};

#[derive(Args, Debug)]
pub struct FundamentalsArgs {
  /// Ticker symbol
  pub symbol: String,

  /// Number of quarters to list
  #[arg(short, long, default_value_t = DEFAULT_SERIES_LAST)]
  pub last: u32,
}

pub async fn execute(args: FundamentalsArgs, config: &Config) -> Result<()> {
  let client = config.client()?;

  let stats = client
    .stock()
    .advanced_stats(&args.symbol)
    .await
    .with_context(|| format!("Failed to fetch advanced stats for {}", args.symbol))?;
  let quarters = client
    .time_series()
    .fundamentals(&args.symbol, Period::Quarterly, args.last)
    .await
    .with_context(|| format!("Failed to fetch quarterly fundamentals for {}", args.symbol))?;

  println!("Ratios");
  ratios_table(&stats).printstd();
  println!();
  quarters_table(&quarters).printstd();
  Ok(())
}

fn money(value: Option<f64>) -> String {
  value.map_or_else(|| "-".to_string(), format_number)
}

fn ratios_table(stats: &AdvancedStats) -> Table {
  let mut table = Table::new();
  table.add_row(row!["P/E", or_dash(stats.pe_ratio), "Revenue", money(stats.revenue)]);
  table.add_row(row![
    "Forward P/E",
    or_dash(stats.forward_pe_ratio),
    "Cash",
    money(stats.total_cash)
  ]);
  table.add_row(row!["PEG Ratio", or_dash(stats.peg_ratio), "Debt", money(stats.current_debt)]);
  table.add_row(row![
    "Price to Sales",
    or_dash(stats.price_to_sales),
    "200 Day Moving Average",
    or_dash(stats.day_200_moving_avg)
  ]);
  table.add_row(row![
    "Price to Book",
    or_dash(stats.price_to_book),
    "50 Day Moving Average",
    or_dash(stats.day_50_moving_avg)
  ]);
  table
}

fn quarter_label(record: &FundamentalsRecord) -> String {
  format!("Q{} {}", or_dash(record.fiscal_quarter), or_dash(record.fiscal_year))
}

fn quarters_table(quarters: &[FundamentalsRecord]) -> Table {
  let mut table = Table::new();
  table.set_titles(row!["Quarter", "Filing Date", "Revenue", "Net Income"]);
  for quarter in quarters {
    table.add_row(row![
      quarter_label(quarter),
      or_dash(quarter.filing_date.as_deref()),
      money(quarter.revenue),
      money(quarter.income_net)
    ]);
  }
  table
}
