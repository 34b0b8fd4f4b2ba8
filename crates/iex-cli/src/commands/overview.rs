use crate::commands::or_dash;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use iex_models::stock::{Company, Logo};

#[derive(Args, Debug)]
pub struct OverviewArgs {
  /// Ticker symbol
  pub symbol: String,
}

pub async fn execute(args: OverviewArgs, config: &Config) -> Result<()> {
  let client = config.client()?;
  let stock = client.stock();

  let logo = stock
    .logo(&args.symbol)
    .await
    .with_context(|| format!("Failed to fetch logo for {}", args.symbol))?;
  let company = stock
    .company(&args.symbol)
    .await
    .with_context(|| format!("Failed to fetch company profile for {}", args.symbol))?;

  print!("{}", render(&logo, &company));
  Ok(())
}

fn render(logo: &Logo, company: &Company) -> String {
  let mut out = String::new();
  out.push_str(&format!("{}\n", or_dash(company.company_name.as_deref())));
  out.push_str(&format!("Logo: {}\n", or_dash(logo.url.as_deref())));
  out.push_str(&format!(
    "Industry: {} | Sector: {} | Exchange: {}\n",
    or_dash(company.industry.as_deref()),
    or_dash(company.sector.as_deref()),
    or_dash(company.exchange.as_deref())
  ));
  out.push_str(&format!("CEO: {}\n", or_dash(company.ceo.as_deref())));
  if let Some(website) = &company.website {
    out.push_str(&format!("Website: {}\n", website));
  }
  if let Some(description) = &company.description {
    out.push_str(&format!("\n{}\n", description));
  }
  out
}
