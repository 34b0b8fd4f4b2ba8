use anyhow::{Context, Result};
use iex_client::{CacheConfig, IexClient};
use iex_core::{Config as CoreConfig, Environment};
use std::env;
use std::path::{Path, PathBuf};

/// Default response-cache lifetime for one CLI run
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, Clone)]
pub struct Config {
  pub api_config: CoreConfig,
  /// 0 disables the response cache
  pub cache_ttl_secs: u64,
  /// Directory relative export paths are resolved against
  pub export_dir: PathBuf,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    let api_config =
      CoreConfig::from_env().context("IEX_API_TOKEN environment variable not set or invalid")?;

    let cache_ttl_secs = match env::var("IEX_CACHE_TTL_SECS") {
      Ok(value) => value.parse().context("IEX_CACHE_TTL_SECS must be a whole number of seconds")?,
      Err(_) => DEFAULT_CACHE_TTL_SECS,
    };

    let export_dir =
      env::var("IEX_EXPORT_DIR").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from("."));

    Ok(Self { api_config, cache_ttl_secs, export_dir })
  }

  /// Point the run at the sandbox deployment
  pub fn use_sandbox(&mut self) {
    self.api_config = self.api_config.clone().with_environment(Environment::Sandbox);
  }

  /// Client for this run, with the response cache unless it is disabled
  pub fn client(&self) -> Result<IexClient> {
    let client = if self.cache_ttl_secs == 0 {
      IexClient::new(self.api_config.clone())
    } else {
      IexClient::with_cache(
        self.api_config.clone(),
        CacheConfig::default().with_ttl_secs(self.cache_ttl_secs),
      )
    };
    client.context("Failed to create IEX Cloud client")
  }

  /// Resolve an export file name against `export_dir`
  pub fn export_path(&self, file: &Path) -> PathBuf {
    if file.is_absolute() { file.to_path_buf() } else { self.export_dir.join(file) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn config(cache_ttl_secs: u64) -> Config {
    Config {
      api_config: CoreConfig::default_with_token("test_token".to_string()),
      cache_ttl_secs,
      export_dir: PathBuf::from("/tmp/exports"),
    }
  }

  #[test]
  fn test_relative_export_path_uses_export_dir() {
    let config = config(300);
    assert_eq!(config.export_path(Path::new("msft.csv")), PathBuf::from("/tmp/exports/msft.csv"));
    assert_eq!(config.export_path(Path::new("/data/msft.csv")), PathBuf::from("/data/msft.csv"));
  }

  #[test]
  fn test_cache_follows_ttl() {
    assert!(config(300).client().unwrap().cache().is_some());
    assert!(config(0).client().unwrap().cache().is_none());
  }

  #[test]
  fn test_sandbox_switch() {
    let mut config = config(0);
    config.use_sandbox();
    assert_eq!(config.api_config.environment, Environment::Sandbox);
    assert_eq!(config.client().unwrap().base_url(), iex_core::IEX_SANDBOX_BASE_URL);
  }
}
