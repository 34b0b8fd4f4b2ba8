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

//! Ticker symbols and the bounded selection used by the comparison view

use crate::MAX_COMPARISON_TICKERS;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Trim and upper-case a user supplied symbol.
///
/// Returns `None` for blank input.
pub fn normalize_symbol(raw: &str) -> Option<String> {
  let symbol = raw.trim();
  if symbol.is_empty() { None } else { Some(symbol.to_ascii_uppercase()) }
}

/// Ordered selection of one primary symbol and up to three more.
///
/// Entry order is kept; blank entries are skipped. Duplicates are allowed,
/// each one gets its own comparison column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerSet {
  symbols: Vec<String>,
}

impl TickerSet {
  /// Start a selection with its primary symbol
  pub fn new(primary: &str) -> Result<Self> {
    let primary = normalize_symbol(primary)
      .ok_or_else(|| Error::InvalidInput("primary symbol is empty".to_string()))?;
    let mut symbols = Vec::with_capacity(MAX_COMPARISON_TICKERS);
    symbols.push(primary);
    Ok(Self { symbols })
  }

  /// Build from a list of entries, the first non-blank one being the primary
  pub fn from_symbols<I, S>(entries: I) -> Result<Self>
  where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
  {
    let mut entries = entries.into_iter().filter_map(|entry| normalize_symbol(entry.as_ref()));
    let primary =
      entries.next().ok_or_else(|| Error::InvalidInput("no ticker symbols supplied".to_string()))?;

    let mut set = TickerSet::new(&primary)?;
    for symbol in entries {
      set.push(&symbol)?;
    }
    Ok(set)
  }

  /// Add a symbol after the existing ones.
  ///
  /// Blank input is ignored and reported as `Ok(false)`.
  pub fn push(&mut self, raw: &str) -> Result<bool> {
    let Some(symbol) = normalize_symbol(raw) else {
      return Ok(false);
    };
    if self.symbols.len() >= MAX_COMPARISON_TICKERS {
      return Err(Error::InvalidInput(format!(
        "at most {} tickers can be compared, '{}' does not fit",
        MAX_COMPARISON_TICKERS, symbol
      )));
    }
    self.symbols.push(symbol);
    Ok(true)
  }

  pub fn primary(&self) -> &str {
    &self.symbols[0]
  }

  pub fn symbols(&self) -> &[String] {
    &self.symbols
  }

  pub fn len(&self) -> usize {
    self.symbols.len()
  }

  /// Always false; a set cannot exist without its primary symbol
  pub fn is_empty(&self) -> bool {
    self.symbols.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, String> {
    self.symbols.iter()
  }
}

impl<'a> IntoIterator for &'a TickerSet {
  type Item = &'a String;
  type IntoIter = std::slice::Iter<'a, String>;

  fn into_iter(self) -> Self::IntoIter {
    self.symbols.iter()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_normalize_symbol() {
    assert_eq!(normalize_symbol(" msft "), Some("MSFT".to_string()));
    assert_eq!(normalize_symbol("   "), None);
  }

  #[test]
  fn test_ticker_set_keeps_entry_order() {
    let set = TickerSet::from_symbols(["msft", "", "aapl", "goog"]).unwrap();
    assert_eq!(set.symbols(), &["MSFT", "AAPL", "GOOG"]);
    assert_eq!(set.primary(), "MSFT");
    assert_eq!(set.len(), 3);
  }

  #[test]
  fn test_ticker_set_capacity() {
    let mut set = TickerSet::new("A").unwrap();
    assert!(set.push("B").unwrap());
    assert!(set.push("C").unwrap());
    assert!(set.push("D").unwrap());
    assert!(!set.push(" ").unwrap());
    assert!(matches!(set.push("E"), Err(Error::InvalidInput(_))));
    assert_eq!(set.len(), MAX_COMPARISON_TICKERS);
  }

  #[test]
  fn test_ticker_set_requires_primary() {
    assert!(TickerSet::new("").is_err());
    assert!(TickerSet::from_symbols(["", "  "]).is_err());
    assert!(TickerSet::from_symbols(Vec::<String>::new()).is_err());
  }

  #[test]
  fn test_leading_blank_entries_are_skipped() {
    let set = TickerSet::from_symbols(["", "ibm"]).unwrap();
    assert_eq!(set.primary(), "IBM");
  }
}
