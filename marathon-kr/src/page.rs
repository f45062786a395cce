// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use catalog::{draw_calendar, FilterCriteria, MarathonEvent, Stats, MARATHONS};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, instrument};
use weather::{WeatherInfo, WeatherLookup, WeatherProvider, WEATHER_UNAVAILABLE};

pub const TITLE: &str = "한국 마라톤 일정 관리";
pub const MISSING_API_KEY: &str = "날씨 API 키가 설정되지 않았습니다 (OPENWEATHER_API_KEY)";
const TABLE_HEADER: [&str; 5] = ["날짜", "대회명", "지역", "거리", "날씨"];

#[derive(Debug, Clone, Default)]
pub struct SearchInput {
  pub search: String,
  pub month: String,
  pub distance: String,
}

#[derive(Debug, Serialize)]
pub struct ResultRow {
  #[serde(flatten)]
  pub event: &'static MarathonEvent,
  pub weather: Option<WeatherInfo>,
}

impl ResultRow {
  fn cells(&self) -> [String; 5] {
    [
      self.event.iso_date(),
      self.event.name.to_string(),
      self.event.location.to_string(),
      format!("{} km", format_km(self.event.distance)),
      self
        .weather
        .as_ref()
        .map_or_else(|| WEATHER_UNAVAILABLE.to_string(), WeatherInfo::summary),
    ]
  }
}

#[derive(Debug, Serialize)]
pub struct Page {
  pub rows: Vec<ResultRow>,
  pub notices: Vec<String>,
  pub stats: Stats,
  pub calendar: String,
}

impl Page {
  /// Runs one search interaction: filter, annotate each hit with weather,
  /// collect statistics and draw the calendar for `today`.
  #[instrument(skip(lookup))]
  pub async fn build<P: WeatherProvider>(
    input: &SearchInput,
    lookup: Option<&WeatherLookup<P>>,
    today: NaiveDate,
  ) -> Self {
    let (criteria, input_errors) =
      FilterCriteria::parse_lenient(&input.search, &input.month, &input.distance);
    let mut notices: Vec<String> = input_errors.iter().map(ToString::to_string).collect();

    let filtered = criteria.apply(&MARATHONS);
    let stats = Stats::collect(&MARATHONS, &filtered);

    let mut rows = Vec::with_capacity(filtered.len());
    for event in filtered {
      let weather = match lookup {
        Some(lookup) => lookup.get_weather(event.location).await,
        None => None,
      };
      rows.push(ResultRow { event, weather });
    }

    match lookup {
      Some(lookup) => notices.extend(lookup.take_failures().await),
      None if !rows.is_empty() => notices.push(MISSING_API_KEY.to_string()),
      None => {}
    }

    info!("Search matched {} events", rows.len());
    Self {
      rows,
      notices,
      stats,
      calendar: draw_calendar(today, &MARATHONS),
    }
  }

  pub fn render_text(&self) -> String {
    let mut out = vec![TITLE.to_string(), String::new(), "[마라톤 검색]".to_string()];

    out.push(format!("총 마라톤 수: {}", self.rows.len()));
    out.extend(self.notices.iter().map(|n| format!("오류: {}", n)));
    if !self.rows.is_empty() {
      out.push(TABLE_HEADER.join(" | "));
      out.extend(self.rows.iter().map(|row| row.cells().join(" | ")));
    }

    out.push(String::new());
    out.push("[통계]".to_string());
    out.push(format!("총 마라톤 수: {}", self.stats.total_marathons));
    out.push(format!("선택된 마라톤: {}", self.stats.selected_marathons));
    out.push(format!("총 거리 (km): {}", format_km(self.stats.total_distance)));

    out.push(String::new());
    out.push("[달력 보기]".to_string());
    out.push(self.calendar.clone());

    out.join("\n")
  }
}

/// Up to four decimals without trailing zeros: `42.195`, `10`, `199.8775`.
fn format_km(km: f64) -> String {
  let text = format!("{:.4}", km);
  text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use async_trait::async_trait;
  use error::Error;
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::time::Duration;

  struct FakeProvider {
    failing_location: &'static str,
    calls: AtomicUsize,
  }

  impl FakeProvider {
    fn failing_for(location: &'static str) -> Self {
      Self {
        failing_location: location,
        calls: AtomicUsize::new(0),
      }
    }
  }

  #[async_trait]
  impl WeatherProvider for FakeProvider {
    async fn fetch_weather(&self, location: &str) -> Result<WeatherInfo, Error> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      if location == self.failing_location {
        return Err(Error::ApiError("API request failed: 500".into()));
      }
      Ok(WeatherInfo {
        temp: 15.5,
        feels_like: None,
        condition: None,
        condition_desc: "맑음".into(),
        location: Some(location.to_string()),
      })
    }
  }

  fn input(search: &str, month: &str, distance: &str) -> SearchInput {
    SearchInput {
      search: search.into(),
      month: month.into(),
      distance: distance.into(),
    }
  }

  fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 11, 1).unwrap()
  }

  #[tokio::test]
  async fn failed_lookup_falls_back_per_row() {
    let lookup = WeatherLookup::new(FakeProvider::failing_for("광주"), Duration::from_secs(60));
    let page = Page::build(&input("", "11", ""), Some(&lookup), today()).await;

    assert_eq!(page.rows.len(), 2);
    assert_eq!(page.rows[0].cells()[4], "15.5°C, 맑음");
    assert_eq!(page.rows[1].cells()[4], WEATHER_UNAVAILABLE);
    assert_eq!(page.notices.len(), 1);

    let text = page.render_text();
    assert!(text.contains("2024-11-05 | 제주국제마라톤 | 제주 | 21.0975 km | 15.5°C, 맑음"));
    assert!(text.contains("2024-11-19 | 광주마라톤 | 광주 | 10 km | 날씨 정보 없음"));
    assert!(text.contains("오류: 날씨 정보를 가져오는데 실패했습니다"));
  }

  #[tokio::test]
  async fn stats_use_full_catalog_distance() {
    let lookup = WeatherLookup::new(FakeProvider::failing_for(""), Duration::from_secs(60));
    let page = Page::build(&input("경주", "5", ""), Some(&lookup), today()).await;

    assert_eq!(page.stats.total_marathons, 6);
    assert_eq!(page.stats.selected_marathons, 1);
    let text = page.render_text();
    assert!(text.contains("선택된 마라톤: 1"));
    assert!(text.contains("총 거리 (km): 199.8775"));
  }

  #[tokio::test]
  async fn malformed_input_becomes_a_notice() {
    let lookup = WeatherLookup::new(FakeProvider::failing_for(""), Duration::from_secs(60));
    let page = Page::build(&input("", "13", "far"), Some(&lookup), today()).await;

    assert_eq!(page.rows.len(), 6);
    assert_eq!(page.notices.len(), 2);
  }

  #[tokio::test]
  async fn missing_api_key_is_reported_once() {
    let page = Page::build::<FakeProvider>(&input("", "", "42.195"), None, today()).await;

    assert_eq!(page.rows.len(), 3);
    assert!(page.rows.iter().all(|r| r.weather.is_none()));
    assert_eq!(page.notices, vec![MISSING_API_KEY.to_string()]);
  }

  #[tokio::test]
  async fn empty_result_has_no_table() {
    let page = Page::build::<FakeProvider>(&input("없음", "", ""), None, today()).await;
    let text = page.render_text();

    assert!(page.notices.is_empty());
    assert!(text.contains("총 마라톤 수: 0"));
    assert!(!text.contains("날짜 | 대회명"));
  }

  #[tokio::test]
  async fn calendar_section_follows_statistics() {
    let page = Page::build::<FakeProvider>(&input("", "", ""), None, today()).await;
    let text = page.render_text();

    let stats_at = text.find("[통계]").unwrap();
    let calendar_at = text.find("[달력 보기]").unwrap();
    assert!(stats_at < calendar_at);
    assert!(text.ends_with("30"));
    assert!(text.contains("2024년 11월\n1\n"));
  }

  #[test]
  fn km_formatting() {
    assert_eq!(format_km(42.195), "42.195");
    assert_eq!(format_km(10.0), "10");
    assert_eq!(format_km(21.0975), "21.0975");
  }

  #[test]
  fn json_rows_flatten_the_event() {
    let row = ResultRow {
      event: &MARATHONS[0],
      weather: None,
    };
    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["name"], "서울국제마라톤");
    assert_eq!(json["date"], "2024-04-16");
    assert!(json["weather"].is_null());
  }
}
