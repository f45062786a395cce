// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
mod page;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use config::Config;
use page::{Page, SearchInput};
use std::{env, path::PathBuf};
use tracing::{instrument, warn};
use weather::{WeatherConfig, WeatherLookup};

/// 한국 마라톤 일정 관리
#[derive(Debug, Parser)]
#[command(name = "marathon-kr", about = "Korean marathon schedule with live weather")]
struct Cli {
  /// Text to look for in event names and locations.
  #[arg(long, short, default_value = "")]
  search: String,

  /// Month 1-12. Empty means every month.
  #[arg(long, short, default_value = "")]
  month: String,

  /// Distance in km (42.195, 21.0975, 10, 5). Empty means any distance.
  #[arg(long, short, default_value = "")]
  distance: String,

  /// Optional TOML configuration file.
  #[arg(long, default_value = "marathon-kr.toml")]
  config: PathBuf,

  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
  Text,
  Json,
}

#[cfg(debug_assertions)]
fn setup_logging() {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .init();
}

#[cfg(not(debug_assertions))]
fn setup_logging() {
  tracing_subscriber::fmt().with_writer(std::io::stderr).init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
  dotenvy::dotenv().ok();
  setup_logging();

  let cli = Cli::parse();
  let config = Config::load_or_default(&cli.config)?;
  run(cli, config).await
}

#[instrument(skip(config))]
async fn run(cli: Cli, config: Config) -> Result<()> {
  let lookup = weather_lookup(&config);
  let input = SearchInput {
    search: cli.search,
    month: cli.month,
    distance: cli.distance,
  };

  let today = chrono::Local::now().date_naive();
  let page = Page::build(&input, lookup.as_ref(), today).await;

  match cli.format {
    OutputFormat::Text => println!("{}", page.render_text()),
    OutputFormat::Json => println!(
      "{}",
      serde_json::to_string_pretty(&page).context("Failed to serialize page")?
    ),
  }

  Ok(())
}

/// Weather is optional: without a usable key the page still renders with
/// placeholder weather.
fn weather_lookup(config: &Config) -> Option<WeatherLookup> {
  let Ok(api_key) = env::var("OPENWEATHER_API_KEY") else {
    warn!("OPENWEATHER_API_KEY is not set, weather lookups are disabled");
    return None;
  };

  WeatherConfig::from_settings(api_key, &config.weather)
    .and_then(WeatherLookup::from_config)
    .map_err(|e| warn!("Weather lookups are disabled: {}", e))
    .ok()
}
