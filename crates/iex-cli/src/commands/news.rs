use crate::commands::or_dash;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use iex_core::DEFAULT_NEWS_LAST;
use iex_models::news::NewsArticle;

#[derive(Args, Debug)]
pub struct NewsArgs {
  /// Ticker symbol
  pub symbol: String,

  /// Number of articles (1 to 50)
  #[arg(short, long, default_value_t = DEFAULT_NEWS_LAST)]
  pub last: u32,
}

pub async fn execute(args: NewsArgs, config: &Config) -> Result<()> {
  let client = config.client()?;
  let articles = client
    .news()
    .company_news(&args.symbol, args.last)
    .await
    .with_context(|| format!("Failed to fetch news for {}", args.symbol))?;

  if articles.is_empty() {
    println!("No news for {}", args.symbol.to_uppercase());
  }
  for article in &articles {
    println!("{}", render(article));
  }
  Ok(())
}

fn render(article: &NewsArticle) -> String {
  let posted_at = article
    .published_at()
    .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string())
    .unwrap_or_else(|| "an unknown time".to_string());

  let mut text = format!(
    "{}\nPosted by {} at {}\n{}\n{}\n",
    or_dash(article.headline.as_deref()),
    or_dash(article.source.as_deref()),
    posted_at,
    or_dash(article.url.as_deref()),
    article.summary.as_deref().unwrap_or_default()
  );
  if let Some(image) = article.image.as_deref().filter(|url| !url.is_empty()) {
    text.push_str(&format!("Image: {}\n", image));
  }
  text
}
