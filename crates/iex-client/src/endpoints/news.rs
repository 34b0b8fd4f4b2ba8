use super::Gateway;
use crate::transport::ApiRequest;
use iex_core::{DEFAULT_NEWS_LAST, Endpoint, Error, Result};
use iex_models::news::NewsArticle;
use tracing::instrument;

/// Company news endpoints
pub struct NewsEndpoints {
  gateway: Gateway,
}

impl NewsEndpoints {
  /// Create a new news endpoints instance
  pub fn new(gateway: Gateway) -> Self {
    Self { gateway }
  }

  /// The `last` most recent articles about `symbol` (1 to 50)
  ///
  /// # Examples
  ///
  /// ```rust,ignore
  /// for article in client.news().company_news("MSFT", 5).await? {
  ///     println!("{:?} ({:?})", article.headline, article.published_at());
  /// }
  /// # Ok::<(), iex_core::Error>(())
  /// ```
  #[instrument(skip(self))]
  pub async fn company_news(&self, symbol: &str, last: u32) -> Result<Vec<NewsArticle>> {
    if !(1..=50).contains(&last) {
      return Err(Error::InvalidInput(format!("news window must be 1..=50, got {}", last)));
    }

    let request = ApiRequest::new(Endpoint::News, symbol).with_segment(last);
    self.gateway.get(&request).await
  }

  /// The default window of ten articles
  pub async fn latest(&self, symbol: &str) -> Result<Vec<NewsArticle>> {
    self.company_news(symbol, DEFAULT_NEWS_LAST).await
  }
}
