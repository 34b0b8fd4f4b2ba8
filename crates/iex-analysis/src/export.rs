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

//! Spreadsheet export of the tabular views

use crate::comparison::ComparisonTable;
use crate::ut_analysis::UtAnalysis;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use iex_core::{Error, Result};
use rust_decimal::Decimal;
use tracing::debug;

/// Columns of every exported sheet: a label column and up to five values
pub const SHEET_WIDTH: usize = 6;

/// File name offered by [`download_link`] when none is given
pub const DEFAULT_EXPORT_NAME: &str = "extract.csv";

/// A rectangular sheet of strings, ready to serialize
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
  pub header: Vec<String>,
  pub rows: Vec<Vec<String>>,
}

impl Sheet {
  fn new(view: &str, symbol: &str) -> Self {
    Self { header: padded(vec![view.to_string(), format!("Ticker: {}", symbol)]), rows: Vec::new() }
  }

  fn push<S: ToString>(&mut self, cells: impl IntoIterator<Item = S>) {
    self.rows.push(padded(cells.into_iter().map(|c| c.to_string()).collect()));
  }

  fn blank(&mut self) {
    self.push(Vec::<String>::new());
  }

  pub fn title(&self) -> &str {
    self.header.first().map_or("", String::as_str)
  }

  /// Serialize as CSV, header first
  pub fn to_csv(&self) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&self.header).map_err(|e| Error::Export(e.to_string()))?;
    for row in &self.rows {
      writer.write_record(row).map_err(|e| Error::Export(e.to_string()))?;
    }
    let bytes = writer.into_inner().map_err(|e| Error::Export(e.to_string()))?;
    debug!("Exported '{}' sheet: {} rows, {} bytes", self.title(), self.rows.len(), bytes.len());
    Ok(bytes)
  }
}

fn padded(mut cells: Vec<String>) -> Vec<String> {
  cells.resize(SHEET_WIDTH.max(cells.len()), String::new());
  cells
}

/// Views that can be laid out as a [`Sheet`]
pub trait ToSheet {
  fn to_sheet(&self) -> Sheet;
}

impl ToSheet for ComparisonTable {
  fn to_sheet(&self) -> Sheet {
    let symbols = self.symbols();
    let mut sheet = Sheet::new("Comparison Analysis", symbols.first().map_or("", String::as_str));
    sheet.blank();
    sheet.push(["Key Financial Metrics (in millions)"]);
    sheet.push(["Valuation and Margins: (LFY)"]);
    sheet.blank();
    for row in self.rows() {
      let mut cells = vec![row.label.to_string()];
      cells.extend(row.cells.iter().map(ToString::to_string));
      sheet.push(cells);
    }
    sheet
  }
}

impl ToSheet for UtAnalysis {
  fn to_sheet(&self) -> Sheet {
    let m = &self.overview;
    let mut sheet = Sheet::new("UT Analysis", &m.symbol);
    sheet.blank();
    sheet.push(["Key Financial Metrics (in millions)"]);
    sheet.blank();
    sheet.push(["Valuation Overview (LFY)"]);
    let pair = |label: &str, value: Decimal, label2: &str, value2: Decimal| {
      [label.to_string(), value.to_string(), String::new(), label2.to_string(), value2.to_string()]
    };
    sheet.push(pair("EV/Sales:", m.ev_to_sales, "Price:", m.price));
    sheet.push(pair("P/E:", m.pe_ratio, "M.Cap:", m.market_cap));
    sheet.push(pair("Net Income:", m.net_income, "EV:", m.enterprise_value));
    sheet.blank();
    sheet.blank();
    sheet.push(["Revenue Growth:"]);

    let mut years = vec!["Fiscal Year:".to_string()];
    let mut revenue = vec!["Total Revenue:".to_string()];
    let mut growth = vec!["Growth:".to_string()];
    for entry in &self.growth {
      years.push(entry.fiscal_year.map(|y| y.to_string()).unwrap_or_default());
      revenue.push(entry.revenue.to_string());
      growth.push(format!("{}%", entry.growth_pct));
    }
    sheet.push(years);
    sheet.push(revenue);
    sheet.push(growth);
    sheet
  }
}

/// HTML anchor that downloads `bytes` as `filename` through a base64 data URI
pub fn download_link(bytes: &[u8], filename: &str) -> String {
  format!(
    "<a href=\"data:application/octet-stream;base64,{}\" download=\"{}\">Download csv file</a>",
    STANDARD.encode(bytes),
    filename
  )
}
