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

use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use iex_core::View;
use tracing::info;

mod commands;
use commands::{
  compare::CompareArgs, fundamentals::FundamentalsArgs, news::NewsArgs, overview::OverviewArgs,
  ut_analysis::UtAnalysisArgs,
};

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "iex")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Use the IEX Cloud sandbox instead of production
  #[arg(long, global = true)]
  sandbox: bool,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Company profile and logo
  Overview(OverviewArgs),
  /// Latest company news
  News(NewsArgs),
  /// Key ratios and recent quarterly filings
  Fundamentals(FundamentalsArgs),
  /// Valuation overview and revenue growth of one ticker
  UtAnalysis(UtAnalysisArgs),
  /// Side-by-side metrics of up to four tickers
  Compare(CompareArgs),
}

impl Commands {
  fn view(&self) -> View {
    match self {
      Commands::Overview(_) => View::Overview,
      Commands::News(_) => View::News,
      Commands::Fundamentals(_) => View::Fundamentals,
      Commands::UtAnalysis(_) => View::UtAnalysis,
      Commands::Compare(_) => View::ComparisonAnalysis,
    }
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging; RUST_LOG wins when set
  let log_level = if cli.verbose { "debug" } else { "info" };
  let filter = tracing_subscriber::EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
  tracing_subscriber::fmt().with_env_filter(filter).init();

  // Load configuration
  let mut config = config::Config::from_env()?;
  if cli.sandbox {
    config.use_sandbox();
  }
  info!("{} view ({})", cli.command.view(), config.api_config.environment);

  // Execute command
  match cli.command {
    Commands::Overview(args) => commands::overview::execute(args, &config).await?,
    Commands::News(args) => commands::news::execute(args, &config).await?,
    Commands::Fundamentals(args) => commands::fundamentals::execute(args, &config).await?,
    Commands::UtAnalysis(args) => commands::ut_analysis::execute(args, &config).await?,
    Commands::Compare(args) => commands::compare::execute(args, &config).await?,
  }

  Ok(())
}
