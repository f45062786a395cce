// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

pub const DEFAULT_API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_COUNTRY_CODE: &str = "KR";
pub const DEFAULT_UNITS: &str = "metric";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 600;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
  pub weather: WeatherSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeatherSettings {
  pub base_url: String,
  pub country_code: String,
  pub units: String,
  pub cache_ttl_secs: u64,
  pub timeout_secs: u64,
}

impl Default for WeatherSettings {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_API_BASE_URL.to_string(),
      country_code: DEFAULT_COUNTRY_CODE.to_string(),
      units: DEFAULT_UNITS.to_string(),
      cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
      timeout_secs: DEFAULT_TIMEOUT_SECS,
    }
  }
}

impl WeatherSettings {
  pub fn cache_ttl(&self) -> Duration {
    Duration::from_secs(self.cache_ttl_secs)
  }

  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout_secs)
  }
}

impl Config {
  #[instrument(skip(path))]
  pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
      .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = Self::parse(&content)
      .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    debug!("Loaded configuration successfully");
    Ok(config)
  }

  /// Reads `path` if it exists, otherwise falls back to the built-in defaults.
  pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      debug!("No config file at {}, using defaults", path.display());
      return Ok(Self::default());
    }
    Self::from_file(path)
  }

  pub fn parse(content: &str) -> anyhow::Result<Self> {
    Ok(toml::from_str(content)?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.weather.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(config.weather.country_code, "KR");
    assert_eq!(config.weather.units, "metric");
    assert_eq!(config.weather.cache_ttl(), Duration::from_secs(600));
    assert_eq!(config.weather.timeout(), Duration::from_secs(10));
  }

  #[test]
  fn partial_weather_section_keeps_other_defaults() {
    let config = Config::parse(
      r#"
      [weather]
      cache_ttl_secs = 30
      country_code = "JP"
      "#,
    )
    .unwrap();
    assert_eq!(config.weather.cache_ttl_secs, 30);
    assert_eq!(config.weather.country_code, "JP");
    assert_eq!(config.weather.units, "metric");
    assert_eq!(config.weather.timeout_secs, DEFAULT_TIMEOUT_SECS);
  }

  #[test]
  fn wrong_value_type_is_rejected() {
    assert!(Config::parse("[weather]\ncache_ttl_secs = \"soon\"").is_err());
  }

  #[test]
  fn missing_file_falls_back_to_defaults() {
    let config = Config::load_or_default("this/file/does/not/exist.toml").unwrap();
    assert_eq!(config.weather.cache_ttl_secs, DEFAULT_CACHE_TTL_SECS);
  }
}
