use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One article of `stock/{symbol}/news/last/{n}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsArticle {
  /// Publication time, milliseconds since the epoch
  pub datetime: Option<i64>,
  pub headline: Option<String>,
  pub source: Option<String>,
  pub url: Option<String>,
  pub summary: Option<String>,
  /// Comma separated symbols the article relates to
  pub related: Option<String>,
  pub image: Option<String>,
  pub lang: Option<String>,
  pub has_paywall: Option<bool>,
}

impl NewsArticle {
  /// Publication time as a UTC timestamp
  pub fn published_at(&self) -> Option<DateTime<Utc>> {
    self.datetime.and_then(DateTime::<Utc>::from_timestamp_millis)
  }

  /// Symbols listed in `related`
  pub fn related_symbols(&self) -> Vec<&str> {
    self
      .related
      .as_deref()
      .map(|r| r.split(',').map(str::trim).filter(|s| !s.is_empty()).collect())
      .unwrap_or_default()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_news_article_timestamp() {
    let json = r#"{
      "datetime": 1632150000000,
      "headline": "Microsoft announces dividend",
      "source": "Newswire",
      "url": "https://example.com/a",
      "summary": "Quarterly dividend declared.",
      "related": "MSFT, AAPL",
      "hasPaywall": false
    }"#;
    let article: NewsArticle = serde_json::from_str(json).unwrap();
    let published = article.published_at().unwrap();
    assert_eq!(published.to_rfc3339(), "2021-09-20T15:00:00+00:00");
    assert_eq!(article.related_symbols(), vec!["MSFT", "AAPL"]);
    assert_eq!(article.has_paywall, Some(false));
  }

  #[test]
  fn test_news_article_without_datetime() {
    let article: NewsArticle = serde_json::from_str(r#"{"headline": "x"}"#).unwrap();
    assert!(article.published_at().is_none());
    assert!(article.related_symbols().is_empty());
  }
}
