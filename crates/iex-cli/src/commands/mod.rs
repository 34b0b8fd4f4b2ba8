pub mod compare;
pub mod fundamentals;
pub mod news;
pub mod overview;
pub mod ut_analysis;

use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use iex_analysis::{Sheet, download_link};
use std::path::PathBuf;
use tracing::info;

/// Export options shared by the tabular views
#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
  /// Write the view as CSV to FILE (relative paths go under IEX_EXPORT_DIR)
  #[arg(long, value_name = "FILE")]
  pub export: Option<PathBuf>,

  /// Print an HTML download link with the CSV embedded
  #[arg(long)]
  pub link: bool,
}

/// Write and/or link `sheet` as requested. Returns the written path, if any.
pub fn export_sheet(sheet: &Sheet, args: &ExportArgs, config: &Config) -> Result<Option<PathBuf>> {
  if args.export.is_none() && !args.link {
    return Ok(None);
  }

  let bytes = sheet.to_csv()?;

  let written = match &args.export {
    Some(file) => {
      let path = config.export_path(file);
      std::fs::write(&path, &bytes)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
      info!("Exported {} to {}", sheet.title(), path.display());
      Some(path)
    }
    None => None,
  };

  if args.link {
    let filename = written
      .as_ref()
      .and_then(|path| path.file_name())
      .map(|name| name.to_string_lossy().into_owned())
      .unwrap_or_else(|| iex_analysis::DEFAULT_EXPORT_NAME.to_string());
    println!("{}", download_link(&bytes, &filename));
  }

  Ok(written)
}

/// Thousands-separated rendering of a whole amount, e.g. `168,088,000,000`
pub fn format_number(value: f64) -> String {
  let rounded = value.round();
  let digits = format!("{}", rounded.abs() as u128);
  let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      out.push(',');
    }
    out.push(ch);
  }
  if rounded < 0.0 { format!("-{}", out) } else { out }
}

/// Display an optional figure, `-` when the provider left it out
pub fn or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
  value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;
  use iex_analysis::{ToSheet, build};
  use iex_core::Config as CoreConfig;

  #[test]
  fn test_format_number() {
    assert_eq!(format_number(168_088_000_000.0), "168,088,000,000");
    assert_eq!(format_number(999.0), "999");
    assert_eq!(format_number(1000.0), "1,000");
    assert_eq!(format_number(-61_271_000.4), "-61,271,000");
    assert_eq!(format_number(0.0), "0");
  }

  #[test]
  fn test_or_dash() {
    assert_eq!(or_dash(Some(1.5)), "1.5");
    assert_eq!(or_dash::<f64>(None), "-");
  }

  #[test]
  fn test_export_writes_csv_under_export_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
      api_config: CoreConfig::default_with_token("test_token".to_string()),
      cache_ttl_secs: 0,
      export_dir: dir.path().to_path_buf(),
    };
    let metrics = iex_analysis::TickerMetrics {
      symbol: "AAA".to_string(),
      fiscal_year: Some(2021),
      price: 10.into(),
      ev_to_sales: 1.into(),
      ev_to_ebitda: 2.into(),
      market_cap: 3.into(),
      pe_ratio: 4.into(),
      gross_margin: 0.into(),
      ebitda_margin: 0.into(),
      net_income: 5.into(),
      enterprise_value: 6.into(),
    };
    let sheet = build(&[metrics]).unwrap().to_sheet();
    let args = ExportArgs { export: Some(PathBuf::from("compare.csv")), link: false };

    let path = export_sheet(&sheet, &args, &config).unwrap().unwrap();

    assert_eq!(path, dir.path().join("compare.csv"));
    let contents = std::fs::read_to_string(path).unwrap();
    assert!(contents.starts_with("Comparison Analysis,Ticker: AAA"));
  }

  #[test]
  fn test_export_without_options_is_a_no_op() {
    let config = Config {
      api_config: CoreConfig::default_with_token("test_token".to_string()),
      cache_ttl_secs: 0,
      export_dir: PathBuf::from("/nonexistent"),
    };
    let sheet = Sheet { header: vec![], rows: vec![] };
    assert!(export_sheet(&sheet, &ExportArgs::default(), &config).unwrap().is_none());
  }
}
