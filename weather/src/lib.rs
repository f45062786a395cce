// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod cache;
pub mod config;
pub mod models;
pub mod service;

pub use cache::WeatherCache;
pub use config::WeatherConfig;
pub use models::weather::WeatherInfo;
pub use service::{OpenWeatherClient, WeatherLookup, WeatherProvider};

/// Shown in place of weather when a lookup fails.
pub const WEATHER_UNAVAILABLE: &str = "날씨 정보 없음";
