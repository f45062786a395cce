// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::catalog::MarathonEvent;
use error::Error;
use tracing::{debug, instrument};

/// Distances closer than this (in km) are treated as equal.
pub const DISTANCE_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
  pub search_term: String,
  pub month: Option<u32>,
  pub distance: Option<f64>,
}

impl FilterCriteria {
  /// Builds criteria from raw selector values. Blank month or distance means
  /// "no filter"; anything else must be well-formed.
  pub fn parse(search_term: &str, month: &str, distance: &str) -> Result<Self, Error> {
    Ok(Self {
      search_term: search_term.to_string(),
      month: parse_month(month)?,
      distance: parse_distance(distance)?,
    })
  }

  /// Like [`FilterCriteria::parse`], but a malformed field is dropped and its
  /// error returned alongside the criteria instead of failing the whole input.
  pub fn parse_lenient(search_term: &str, month: &str, distance: &str) -> (Self, Vec<Error>) {
    let mut errors = Vec::new();

    let month = parse_month(month).unwrap_or_else(|e| {
      errors.push(e);
      None
    });
    let distance = parse_distance(distance).unwrap_or_else(|e| {
      errors.push(e);
      None
    });

    let criteria = Self {
      search_term: search_term.to_string(),
      month,
      distance,
    };
    (criteria, errors)
  }

  pub fn matches(&self, event: &MarathonEvent) -> bool {
    let term = self.search_term.to_lowercase();
    let text_match =
      event.name.to_lowercase().contains(&term) || event.location.to_lowercase().contains(&term);

    let month_match = self.month.map_or(true, |m| event.month() == m);
    let distance_match = self
      .distance
      .map_or(true, |d| (event.distance - d).abs() < DISTANCE_EPSILON);

    text_match && month_match && distance_match
  }

  #[instrument(
    skip(self, events),
    fields(search = %self.search_term, month = ?self.month, distance = ?self.distance)
  )]
  pub fn apply<'a>(&self, events: &'a [MarathonEvent]) -> Vec<&'a MarathonEvent> {
    let filtered: Vec<_> = events.iter().filter(|e| self.matches(e)).collect();
    debug!("{} of {} events matched", filtered.len(), events.len());
    filtered
  }
}

pub fn filter_marathons<'a>(
  events: &'a [MarathonEvent],
  search_term: &str,
  month: &str,
  distance: &str,
) -> Result<Vec<&'a MarathonEvent>, Error> {
  Ok(FilterCriteria::parse(search_term, month, distance)?.apply(events))
}

fn parse_month(raw: &str) -> Result<Option<u32>, Error> {
  let raw = raw.trim();
  if raw.is_empty() {
    return Ok(None);
  }
  match raw.parse::<u32>() {
    Ok(m) if (1..=12).contains(&m) => Ok(Some(m)),
    _ => Err(Error::InvalidMonth(raw.to_string())),
  }
}

fn parse_distance(raw: &str) -> Result<Option<f64>, Error> {
  let raw = raw.trim();
  if raw.is_empty() {
    return Ok(None);
  }
  match raw.parse::<f64>() {
    Ok(d) if d.is_finite() && d > 0.0 => Ok(Some(d)),
    _ => Err(Error::InvalidDistance(raw.to_string())),
  }
}
