use super::Gateway;
use crate::transport::ApiRequest;
use iex_core::{DividendRange, Endpoint, Result};
use iex_models::stock::*;
use iex_models::ownership::*;
use tracing::instrument;

/// `stock/{symbol}/...` endpoints: profile, quote, statistics and holders
pub struct StockEndpoints {
  gateway: Gateway,
}

impl StockEndpoints {
  /// Create a new stock endpoints instance
  pub fn new(gateway: Gateway) -> Self {
    Self { gateway }
  }

  /// Company logo URL
  #[instrument(skip(self))]
  pub async fn logo(&self, symbol: &str) -> Result<Logo> {
    self.gateway.get(&ApiRequest::new(Endpoint::Logo, symbol)).await
  }

  /// Latest quote
  ///
  /// # Examples
  ///
  /// ```rust,ignore
  /// let quote = client.stock().quote("MSFT").await?;
  /// println!("P/E: {:?}", quote.pe_ratio);
  /// # Ok::<(), iex_core::Error>(())
  /// ```
  #[instrument(skip(self))]
  pub async fn quote(&self, symbol: &str) -> Result<Quote> {
    self.gateway.get(&ApiRequest::new(Endpoint::Quote, symbol)).await
  }

  /// Company profile: name, industry, description, CEO
  #[instrument(skip(self))]
  pub async fn company(&self, symbol: &str) -> Result<Company> {
    self.gateway.get(&ApiRequest::new(Endpoint::Company, symbol)).await
  }

  /// Valuation ratios, balances and moving averages
  #[instrument(skip(self))]
  pub async fn advanced_stats(&self, symbol: &str) -> Result<AdvancedStats> {
    self.gateway.get(&ApiRequest::new(Endpoint::AdvancedStats, symbol)).await
  }

  /// Dividends paid over `range`
  #[instrument(skip(self))]
  pub async fn dividends(&self, symbol: &str, range: DividendRange) -> Result<Vec<Dividend>> {
    self.gateway.get(&ApiRequest::new(Endpoint::Dividends, symbol).with_segment(range)).await
  }

  /// Largest institutional holders
  #[instrument(skip(self))]
  pub async fn institutional_ownership(&self, symbol: &str) -> Result<Vec<InstitutionalOwner>> {
    self.gateway.get(&ApiRequest::new(Endpoint::InstitutionalOwnership, symbol)).await
  }

  /// Insider buys and sells
  #[instrument(skip(self))]
  pub async fn insider_transactions(&self, symbol: &str) -> Result<Vec<InsiderTransaction>> {
    self.gateway.get(&ApiRequest::new(Endpoint::InsiderTransactions, symbol)).await
  }
}
