// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::models::weather::WeatherInfo;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::time::Duration;

#[derive(Debug, Clone)]
struct CachedWeather {
  info: WeatherInfo,
  fetched_at: DateTime<Utc>,
}

/// Weather keyed by location string. Entries older than the TTL are ignored
/// and replaced on the next insert.
#[derive(Debug)]
pub struct WeatherCache {
  ttl: TimeDelta,
  entries: HashMap<String, CachedWeather>,
}

impl WeatherCache {
  pub fn new(ttl: Duration) -> Self {
    Self {
      ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
      entries: HashMap::new(),
    }
  }

  pub fn get(&self, location: &str, now: DateTime<Utc>) -> Option<&WeatherInfo> {
    self
      .entries
      .get(location)
      .filter(|cached| now - cached.fetched_at < self.ttl)
      .map(|cached| &cached.info)
  }

  pub fn insert(&mut self, location: impl Into<String>, info: WeatherInfo, now: DateTime<Utc>) {
    self.entries.insert(
      location.into(),
      CachedWeather {
        info,
        fetched_at: now,
      },
    );
  }

  /// Drops expired entries and returns how many were removed.
  pub fn purge_expired(&mut self, now: DateTime<Utc>) -> usize {
    let before = self.entries.len();
    let ttl = self.ttl;
    self.entries.retain(|_, cached| now - cached.fetched_at < ttl);
    before - self.entries.len()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
