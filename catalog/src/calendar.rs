// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::catalog::MarathonEvent;
use chrono::{Datelike, NaiveDate};
use tracing::{instrument, warn};

/// Number of days in `month` of `year`, found as the day before the first of
/// the following month. December rolls over into January of `year + 1`.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
  let (next_year, next_month) = if month == 12 {
    (year + 1, 1)
  } else {
    (year, month + 1)
  };
  let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
  first_of_next.pred_opt().map(|last| last.day())
}

/// Renders the month containing `date` as a header line followed by one line
/// per day. Days with events read `day: name, name`.
#[instrument(skip(events))]
pub fn draw_calendar(date: NaiveDate, events: &[MarathonEvent]) -> String {
  let (year, month) = (date.year(), date.month());
  let mut lines = vec![format!("{}년 {}월", year, month)];

  let Some(days) = days_in_month(year, month) else {
    warn!("Cannot determine month length for {}-{:02}", year, month);
    return lines.join("\n");
  };

  for day in 1..=days {
    let on_day: Vec<&str> = events
      .iter()
      .filter(|e| e.date.year() == year && e.date.month() == month && e.date.day() == day)
      .map(|e| e.name)
      .collect();

    if on_day.is_empty() {
      lines.push(day.to_string());
    } else {
      lines.push(format!("{}: {}", day, on_day.join(", ")));
    }
  }

  lines.join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::MARATHONS;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn december_rolls_over_into_next_year() {
    assert_eq!(days_in_month(2024, 12), Some(31));

    let calendar = draw_calendar(date(2024, 12, 25), &MARATHONS);
    let lines: Vec<&str> = calendar.lines().collect();
    assert_eq!(lines[0], "2024년 12월");
    assert_eq!(lines.len(), 1 + 31);
    assert_eq!(lines[31], "31");
  }

  #[test]
  fn month_lengths() {
    assert_eq!(days_in_month(2024, 2), Some(29));
    assert_eq!(days_in_month(2023, 2), Some(28));
    assert_eq!(days_in_month(2024, 4), Some(30));
    assert_eq!(days_in_month(2024, 13), None);
  }

  #[test]
  fn event_days_are_annotated() {
    let calendar = draw_calendar(date(2024, 11, 1), &MARATHONS);
    let lines: Vec<&str> = calendar.lines().collect();
    assert_eq!(lines[0], "2024년 11월");
    assert_eq!(lines.len(), 1 + 30);
    assert_eq!(lines[5], "5: 제주국제마라톤");
    assert_eq!(lines[19], "19: 광주마라톤");
    assert_eq!(lines[6], "6");
  }

  #[test]
  fn same_day_events_are_comma_joined() {
    let mut events = MARATHONS.to_vec();
    events.push(MarathonEvent {
      id: 7,
      name: "제주 하프",
      ..MARATHONS[4].clone()
    });
    let calendar = draw_calendar(date(2024, 11, 30), &events);
    assert!(calendar.lines().any(|l| l == "5: 제주국제마라톤, 제주 하프"));
  }

  #[test]
  fn other_years_are_not_annotated() {
    let calendar = draw_calendar(date(2025, 11, 1), &MARATHONS);
    assert!(!calendar.contains(':'));
  }
}
