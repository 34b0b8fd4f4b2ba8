//! Configuration management for the IEX Cloud client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Which IEX Cloud deployment to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
  #[default]
  Production,
  Sandbox,
}

impl Environment {
  pub fn base_url(&self) -> &'static str {
    match self {
      Environment::Production => crate::IEX_PRODUCTION_BASE_URL,
      Environment::Sandbox => crate::IEX_SANDBOX_BASE_URL,
    }
  }
}

impl FromStr for Environment {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "production" | "prod" => Ok(Environment::Production),
      "sandbox" | "test" => Ok(Environment::Sandbox),
      other => Err(Error::Config(format!("Unknown IEX environment '{}'", other))),
    }
  }
}

impl std::fmt::Display for Environment {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Environment::Production => write!(f, "production"),
      Environment::Sandbox => write!(f, "sandbox"),
    }
  }
}

/// Main configuration struct for the IEX Cloud client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// IEX Cloud API token
  pub api_token: String,

  /// Production or sandbox deployment
  pub environment: Environment,

  /// API rate limit (requests per second)
  pub rate_limit: u32,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Retries for transport failures (0 = fail on first error)
  pub max_retries: u32,

  /// Base URL, normally derived from `environment`
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_token = env::var("IEX_API_TOKEN")
      .map_err(|_| Error::ApiToken("IEX_API_TOKEN not set".to_string()))?;

    let environment = match env::var("IEX_ENVIRONMENT") {
      Ok(value) => value.parse()?,
      Err(_) => Environment::default(),
    };

    let rate_limit = env::var("IEX_RATE_LIMIT")
      .unwrap_or_else(|_| crate::DEFAULT_RATE_LIMIT.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid IEX_RATE_LIMIT".to_string()))?;

    let timeout_secs = env::var("IEX_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid IEX_TIMEOUT_SECS".to_string()))?;

    let max_retries = env::var("IEX_MAX_RETRIES")
      .unwrap_or_else(|_| "0".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid IEX_MAX_RETRIES".to_string()))?;

    let base_url = env::var("IEX_BASE_URL").unwrap_or_else(|_| environment.base_url().to_string());

    Ok(Config { api_token, environment, rate_limit, timeout_secs, max_retries, base_url })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_token(api_token: String) -> Self {
    Config {
      api_token,
      environment: Environment::Production,
      rate_limit: crate::DEFAULT_RATE_LIMIT,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      max_retries: 0,
      base_url: crate::IEX_PRODUCTION_BASE_URL.to_string(),
    }
  }

  /// Switch deployment, resetting the base URL to match
  pub fn with_environment(mut self, environment: Environment) -> Self {
    self.environment = environment;
    self.base_url = environment.base_url().to_string();
    self
  }

  /// Point the client somewhere else (mock servers, proxies)
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }
}

// The token must never end up in logs
impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Config")
      .field("api_token", &"***")
      .field("environment", &self.environment)
      .field("rate_limit", &self.rate_limit)
      .field("timeout_secs", &self.timeout_secs)
      .field("max_retries", &self.max_retries)
      .field("base_url", &self.base_url)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_from_env() {
    env::set_var("IEX_API_TOKEN", "test_token");
    env::remove_var("IEX_ENVIRONMENT");
    env::remove_var("IEX_BASE_URL");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_token, "test_token");
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.max_retries, 0);
    assert_eq!(config.base_url, crate::IEX_PRODUCTION_BASE_URL);
  }

  #[test]
  fn test_environment_parsing() {
    assert_eq!("sandbox".parse::<Environment>().unwrap(), Environment::Sandbox);
    assert_eq!("Production".parse::<Environment>().unwrap(), Environment::Production);
    assert!("staging".parse::<Environment>().is_err());
  }

  #[test]
  fn test_with_environment_switches_base_url() {
    let config =
      Config::default_with_token("t".to_string()).with_environment(Environment::Sandbox);
    assert_eq!(config.base_url, "https://sandbox.iexapis.com/v1");
  }

  #[test]
  fn test_debug_hides_token() {
    let config = Config::default_with_token("secret-token".to_string());
    let debug_str = format!("{:?}", config);
    assert!(!debug_str.contains("secret-token"));
    assert!(debug_str.contains("base_url"));
  }
}
