//! Dividends, institutional ownership and insider transactions

use serde::{Deserialize, Serialize};

/// One entry of `stock/{symbol}/dividends/{range}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dividend {
  pub ex_date: Option<String>,
  pub payment_date: Option<String>,
  pub record_date: Option<String>,
  pub declared_date: Option<String>,
  pub amount: Option<f64>,
  pub flag: Option<String>,
  pub currency: Option<String>,
  pub description: Option<String>,
  pub frequency: Option<String>,
}

/// One holder of `stock/{symbol}/institutional-ownership`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstitutionalOwner {
  pub entity_proper_name: Option<String>,
  pub report_date: Option<i64>,
  pub reported_holding: Option<f64>,
  pub reported_mv: Option<f64>,
  pub adj_holding: Option<f64>,
  pub adj_mv: Option<f64>,
}

/// One filing of `stock/{symbol}/insider-transactions`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InsiderTransaction {
  pub full_name: Option<String>,
  pub reported_title: Option<String>,
  pub transaction_date: Option<String>,
  pub filing_date: Option<String>,
  pub transaction_code: Option<String>,
  pub transaction_shares: Option<f64>,
  pub transaction_price: Option<f64>,
  pub post_shares: Option<f64>,
}

impl InsiderTransaction {
  /// Shares × price, when both are reported
  pub fn transaction_value(&self) -> Option<f64> {
    Some(self.transaction_shares? * self.transaction_price?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_dividend_deserialization() {
    let json = r#"[{"exDate": "2021-08-18", "paymentDate": "2021-09-09", "amount": 0.56, "frequency": "quarterly"}]"#;
    let dividends: Vec<Dividend> = serde_json::from_str(json).unwrap();
    assert_eq!(dividends.len(), 1);
    assert_eq!(dividends[0].amount, Some(0.56));
    assert_eq!(dividends[0].ex_date.as_deref(), Some("2021-08-18"));
  }

  #[test]
  fn test_institutional_owner() {
    let json = r#"{"entityProperName": "Vanguard Group", "reportedHolding": 580000000, "adjMv": 1.7e11}"#;
    let owner: InstitutionalOwner = serde_json::from_str(json).unwrap();
    assert_eq!(owner.entity_proper_name.as_deref(), Some("Vanguard Group"));
    assert_eq!(owner.reported_holding, Some(580_000_000.0));
  }

  #[test]
  fn test_insider_transaction_value() {
    let tx = InsiderTransaction {
      transaction_shares: Some(-1000.0),
      transaction_price: Some(300.0),
      ..Default::default()
    };
    assert_eq!(tx.transaction_value(), Some(-300_000.0));

    let partial = InsiderTransaction { transaction_shares: Some(10.0), ..Default::default() };
    assert_eq!(partial.transaction_value(), None);
  }
}
