// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use ::config::{
  WeatherSettings, DEFAULT_API_BASE_URL, DEFAULT_COUNTRY_CODE, DEFAULT_TIMEOUT_SECS, DEFAULT_UNITS,
};
use error::Error;
use std::time::Duration;

pub(crate) const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(DEFAULT_TIMEOUT_SECS);

#[derive(Debug, Clone)]
pub struct WeatherConfig {
  pub(crate) api_key: String,
  pub(crate) base_url: String,
  pub(crate) country_code: String,
  pub(crate) units: String,
  pub(crate) cache_ttl: Duration,
  pub(crate) timeout: Duration,
}

impl WeatherConfig {
  pub fn new(api_key: impl Into<String>, cache_ttl: Duration) -> Result<Self, Error> {
    let api_key = api_key.into();
    if api_key.trim().is_empty() {
      return Err(Error::InvalidApiKey);
    }

    Ok(Self {
      api_key,
      base_url: DEFAULT_API_BASE_URL.to_string(),
      country_code: DEFAULT_COUNTRY_CODE.to_string(),
      units: DEFAULT_UNITS.to_string(),
      cache_ttl,
      timeout: DEFAULT_REQUEST_TIMEOUT,
    })
  }

  pub fn from_settings(
    api_key: impl Into<String>,
    settings: &WeatherSettings,
  ) -> Result<Self, Error> {
    Ok(Self {
      base_url: settings.base_url.clone(),
      country_code: settings.country_code.clone(),
      units: settings.units.clone(),
      timeout: settings.timeout(),
      ..Self::new(api_key, settings.cache_ttl())?
    })
  }

  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  pub fn cache_ttl(&self) -> Duration {
    self.cache_ttl
  }
}
