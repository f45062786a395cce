// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use super::api::WeatherResponse;
use error::Error;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherInfo {
  /// Degrees in the configured units (Celsius for `metric`).
  pub temp: f64,
  pub feels_like: Option<f64>,
  pub condition: Option<String>,
  pub condition_desc: String,
  pub location: Option<String>,
}

impl WeatherInfo {
  pub(crate) fn from_response(response: WeatherResponse) -> Result<Self, Error> {
    let weather = response
      .weather
      .into_iter()
      .next()
      .ok_or_else(|| Error::InvalidResponse("No weather data available".into()))?;

    Ok(Self {
      temp: response.main.temp,
      feels_like: response.main.feels_like,
      condition: weather.main,
      condition_desc: weather.description,
      location: response.name,
    })
  }

  /// `"15.3°C, light rain"`
  pub fn summary(&self) -> String {
    format!("{}°C, {}", self.temp, self.condition_desc)
  }
}
