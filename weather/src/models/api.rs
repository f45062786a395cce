// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherResponse {
  pub weather: Vec<Condition>,
  pub main: MainWeather,
  #[serde(default)]
  pub name: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct Condition {
  #[serde(default)]
  pub main: Option<String>,
  pub description: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MainWeather {
  pub temp: f64,
  #[serde(default)]
  pub feels_like: Option<f64>,
}
