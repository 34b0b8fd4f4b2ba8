use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Reporting period of a time-series dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
  Quarterly,
  Annual,
}

impl std::fmt::Display for Period {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Period::Quarterly => write!(f, "quarterly"),
      Period::Annual => write!(f, "annual"),
    }
  }
}

impl FromStr for Period {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "quarterly" | "quarter" | "q" => Ok(Period::Quarterly),
      "annual" | "year" | "a" => Ok(Period::Annual),
      other => Err(Error::InvalidInput(format!("Unknown period '{}'", other))),
    }
  }
}

/// Look-back window for the dividends endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DividendRange {
  OneMonth,
  ThreeMonths,
  SixMonths,
  YearToDate,
  OneYear,
  TwoYears,
  #[default]
  FiveYears,
  Next,
}

impl std::fmt::Display for DividendRange {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      DividendRange::OneMonth => write!(f, "1m"),
      DividendRange::ThreeMonths => write!(f, "3m"),
      DividendRange::SixMonths => write!(f, "6m"),
      DividendRange::YearToDate => write!(f, "ytd"),
      DividendRange::OneYear => write!(f, "1y"),
      DividendRange::TwoYears => write!(f, "2y"),
      DividendRange::FiveYears => write!(f, "5y"),
      DividendRange::Next => write!(f, "next"),
    }
  }
}

impl FromStr for DividendRange {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.to_ascii_lowercase().as_str() {
      "1m" => Ok(DividendRange::OneMonth),
      "3m" => Ok(DividendRange::ThreeMonths),
      "6m" => Ok(DividendRange::SixMonths),
      "ytd" => Ok(DividendRange::YearToDate),
      "1y" => Ok(DividendRange::OneYear),
      "2y" => Ok(DividendRange::TwoYears),
      "5y" => Ok(DividendRange::FiveYears),
      "next" => Ok(DividendRange::Next),
      other => Err(Error::InvalidInput(format!("Unknown dividend range '{}'", other))),
    }
  }
}

/// Dashboard screens a presentation layer can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum View {
  #[default]
  Overview,
  News,
  Fundamentals,
  UtAnalysis,
  ComparisonAnalysis,
}

impl View {
  pub const ALL: [View; 5] =
    [View::Overview, View::News, View::Fundamentals, View::UtAnalysis, View::ComparisonAnalysis];

  /// Screen title as shown to the user
  pub fn title(&self) -> &'static str {
    match self {
      View::Overview => "Overview",
      View::News => "News",
      View::Fundamentals => "Fundamentals",
      View::UtAnalysis => "UT Analysis",
      View::ComparisonAnalysis => "Comparison Analysis",
    }
  }
}

impl std::fmt::Display for View {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.title())
  }
}

impl FromStr for View {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let wanted: String =
      s.chars().filter(|c| c.is_ascii_alphanumeric()).map(|c| c.to_ascii_lowercase()).collect();
    View::ALL
      .into_iter()
      .find(|view| {
        let title: String = view
          .title()
          .chars()
          .filter(|c| c.is_ascii_alphanumeric())
          .map(|c| c.to_ascii_lowercase())
          .collect();
        title == wanted || (wanted == "comparison" && *view == View::ComparisonAnalysis)
      })
      .ok_or_else(|| Error::InvalidInput(format!("Unknown view '{}'", s)))
  }
}
