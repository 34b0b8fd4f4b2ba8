use thiserror::Error;

/// The main error type for iex-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Transport failure, connection reset or request timeout
  #[error("Network error: {0}")]
  Network(String),

  /// Body is not JSON or does not match the expected model
  #[error("Decode error: {0}")]
  Decode(String),

  /// Expected series or field is empty/absent
  #[error("Missing data: {0}")]
  MissingData(String),

  /// Zero-valued denominator
  #[error("Division by zero: {0}")]
  Division(String),

  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Missing, invalid or unauthorized API token
  #[error("API token error: {0}")]
  ApiToken(String),

  /// Quota or request rate exceeded
  #[error("Rate limit exceeded: {0}")]
  RateLimit(String),

  /// Provider does not know the symbol
  #[error("Unknown symbol: {0}")]
  UnknownSymbol(String),

  /// Any other non-success answer from the provider
  #[error("API error ({status}): {message}")]
  Api { status: u16, message: String },

  /// Caller supplied arguments outside the accepted range
  #[error("Invalid input: {0}")]
  InvalidInput(String),

  /// Failure while serializing a sheet
  #[error("Export error: {0}")]
  Export(String),
}

impl From<serde_json::Error> for Error {
  fn from(err: serde_json::Error) -> Self {
    Error::Decode(err.to_string())
  }
}

impl Error {
  /// Shorthand for a missing field on a symbol's payload
  pub fn missing_field(symbol: &str, field: &str) -> Self {
    Error::MissingData(format!("{} has no '{}' value", symbol, field))
  }
}

/// Result type alias for iex-* crates
pub type Result<T> = std::result::Result<T, Error>;
