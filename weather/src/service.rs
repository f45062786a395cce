// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::{cache::WeatherCache, config::WeatherConfig, models::api::WeatherResponse, WeatherInfo};
use async_trait::async_trait;
use chrono::Utc;
use error::Error;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument, warn};
use url::Url;

#[async_trait]
pub trait WeatherProvider: Send + Sync {
  async fn fetch_weather(&self, location: &str) -> Result<WeatherInfo, Error>;
}

/// Current-conditions client for the OpenWeatherMap `weather` endpoint.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
  config: WeatherConfig,
  client: reqwest::Client,
}

impl OpenWeatherClient {
  pub fn new(config: WeatherConfig) -> Result<Self, Error> {
    let client = reqwest::Client::builder().timeout(config.timeout).build()?;
    Ok(Self { config, client })
  }

  fn build_api_url(&self, location: &str) -> Result<Url, Error> {
    let query = format!("{},{}", location, self.config.country_code);
    Url::parse_with_params(
      &self.config.base_url,
      &[
        ("q", query.as_str()),
        ("appid", self.config.api_key.as_str()),
        ("units", self.config.units.as_str()),
      ],
    )
    .map_err(|e| Error::ConfigError(format!("Failed to build API URL: {}", e)))
  }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
  #[instrument(skip(self))]
  async fn fetch_weather(&self, location: &str) -> Result<WeatherInfo, Error> {
    let url = self.build_api_url(location)?;
    let response = self.client.get(url).send().await?;

    match response.status() {
      reqwest::StatusCode::OK => (),
      reqwest::StatusCode::TOO_MANY_REQUESTS => return Err(Error::RateLimitExceeded),
      reqwest::StatusCode::UNAUTHORIZED => return Err(Error::InvalidApiKey),
      status => return Err(Error::ApiError(format!("API request failed: {}", status))),
    }

    let weather_data: WeatherResponse = response
      .json()
      .await
      .map_err(|e| Error::ParseError(e.to_string()))?;

    let info = WeatherInfo::from_response(weather_data)?;
    debug!("Fetched weather for {}: {}", location, info.summary());
    Ok(info)
  }
}

/// Per-session weather lookup. Owns its cache, so separate sessions never
/// see each other's entries.
pub struct WeatherLookup<P = OpenWeatherClient> {
  provider: P,
  cache: RwLock<WeatherCache>,
  failures: RwLock<Vec<String>>,
}

impl WeatherLookup<OpenWeatherClient> {
  pub fn from_config(config: WeatherConfig) -> Result<Self, Error> {
    let ttl = config.cache_ttl();
    Ok(Self::new(OpenWeatherClient::new(config)?, ttl))
  }
}

impl<P: WeatherProvider> WeatherLookup<P> {
  pub fn new(provider: P, cache_ttl: Duration) -> Self {
    Self {
      provider,
      cache: RwLock::new(WeatherCache::new(cache_ttl)),
      failures: RwLock::new(Vec::new()),
    }
  }

  #[instrument(skip(self))]
  pub async fn fetch(&self, location: &str) -> Result<WeatherInfo, Error> {
    if location.trim().is_empty() {
      return Err(Error::InvalidLocation("Location cannot be empty".into()));
    }

    if let Some(cached) = self.cache.read().await.get(location, Utc::now()) {
      info!("Returning cached weather data for {}", location);
      return Ok(cached.clone());
    }

    let weather = self.provider.fetch_weather(location).await?;
    let now = Utc::now();
    let mut cache = self.cache.write().await;
    let purged = cache.purge_expired(now);
    if purged > 0 {
      debug!("Dropped {} expired weather entries", purged);
    }
    cache.insert(location, weather.clone(), now);

    Ok(weather)
  }

  /// Returns `None` when weather is unavailable. The failure is logged and
  /// kept for [`WeatherLookup::take_failures`].
  pub async fn get_weather(&self, location: &str) -> Option<WeatherInfo> {
    match self.fetch(location).await {
      Ok(weather) => Some(weather),
      Err(e) => {
        warn!("Weather lookup for {} failed: {}", location, e);
        self
          .failures
          .write()
          .await
          .push(format!("날씨 정보를 가져오는데 실패했습니다: {}", e));
        None
      }
    }
  }

  pub async fn take_failures(&self) -> Vec<String> {
    std::mem::take(&mut *self.failures.write().await)
  }

  pub async fn cached_locations(&self) -> usize {
    self.cache.read().await.len()
  }
}
