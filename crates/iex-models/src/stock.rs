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

//! Quote, company profile, logo and advanced statistics

use serde::{Deserialize, Serialize};

/// `stock/{symbol}/logo`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Logo {
  pub url: Option<String>,
}

/// `stock/{symbol}/quote`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Quote {
  pub symbol: Option<String>,
  pub company_name: Option<String>,
  pub primary_exchange: Option<String>,
  pub latest_price: Option<f64>,
  pub latest_time: Option<String>,
  pub change: Option<f64>,
  pub change_percent: Option<f64>,
  pub previous_close: Option<f64>,
  pub market_cap: Option<f64>,
  pub pe_ratio: Option<f64>,
  #[serde(rename = "week52High")]
  pub week_52_high: Option<f64>,
  #[serde(rename = "week52Low")]
  pub week_52_low: Option<f64>,
  pub ytd_change: Option<f64>,
  pub volume: Option<f64>,
  pub currency: Option<String>,
}

/// `stock/{symbol}/company`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Company {
  pub symbol: Option<String>,
  pub company_name: Option<String>,
  pub exchange: Option<String>,
  pub industry: Option<String>,
  pub website: Option<String>,
  pub description: Option<String>,
  #[serde(rename = "CEO")]
  pub ceo: Option<String>,
  pub security_name: Option<String>,
  pub issue_type: Option<String>,
  pub sector: Option<String>,
  pub employees: Option<u64>,
  pub country: Option<String>,
  pub tags: Option<Vec<String>>,
}

/// `stock/{symbol}/advanced-stats`
///
/// Only the ratios and balances the fundamentals view shows are modelled;
/// unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdvancedStats {
  pub company_name: Option<String>,
  pub marketcap: Option<f64>,
  pub pe_ratio: Option<f64>,
  #[serde(rename = "forwardPERatio")]
  pub forward_pe_ratio: Option<f64>,
  pub peg_ratio: Option<f64>,
  pub price_to_sales: Option<f64>,
  pub price_to_book: Option<f64>,
  pub revenue: Option<f64>,
  pub gross_profit: Option<f64>,
  pub total_cash: Option<f64>,
  pub current_debt: Option<f64>,
  #[serde(rename = "EBITDA")]
  pub ebitda: Option<f64>,
  pub enterprise_value: Option<f64>,
  pub enterprise_value_to_revenue: Option<f64>,
  pub profit_margin: Option<f64>,
  #[serde(rename = "day200MovingAvg")]
  pub day_200_moving_avg: Option<f64>,
  #[serde(rename = "day50MovingAvg")]
  pub day_50_moving_avg: Option<f64>,
  pub beta: Option<f64>,
}
