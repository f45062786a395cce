// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
  #[error("API error: {0}")]
  ApiError(String),
  #[error("Configuration error: {0}")]
  ConfigError(String),
  #[error("HTTP error: {0}")]
  HttpError(reqwest::Error),
  #[error("Failed to parse response: {0}")]
  ParseError(String),
  #[error("Invalid location: {0}")]
  InvalidLocation(String),
  #[error("Invalid API key")]
  InvalidApiKey,
  #[error("Invalid response from weather API: {0}")]
  InvalidResponse(String),
  #[error("Rate limit exceeded")]
  RateLimitExceeded,
  #[error("Invalid month: {0:?} (expected 1-12)")]
  InvalidMonth(String),
  #[error("Invalid distance: {0:?}")]
  InvalidDistance(String),
}

/// Request URLs carry the API key in the query string, so they are stripped
/// before the error can reach a log line or the user.
impl From<reqwest::Error> for Error {
  fn from(err: reqwest::Error) -> Self {
    Error::HttpError(err.without_url())
  }
}
