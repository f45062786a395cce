// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarathonEvent {
  pub id: u32,
  pub date: NaiveDate,
  pub name: &'static str,
  pub location: &'static str,
  /// Kilometers.
  pub distance: f64,
}

impl MarathonEvent {
  pub fn month(&self) -> u32 {
    self.date.month()
  }

  pub fn iso_date(&self) -> String {
    self.date.format(ISO_DATE_FORMAT).to_string()
  }
}

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
  match NaiveDate::from_ymd_opt(year, month, day) {
    Some(date) => date,
    None => panic!("invalid catalog date"),
  }
}

/// Every known event, in display order. Never mutated.
pub static MARATHONS: [MarathonEvent; 6] = [
  MarathonEvent {
    id: 1,
    date: ymd(2024, 4, 16),
    name: "서울국제마라톤",
    location: "서울",
    distance: 42.195,
  },
  MarathonEvent {
    id: 2,
    date: ymd(2024, 5, 21),
    name: "경주국제마라톤",
    location: "경주",
    distance: 42.195,
  },
  MarathonEvent {
    id: 3,
    date: ymd(2024, 9, 10),
    name: "인천국제마라톤",
    location: "인천",
    distance: 42.195,
  },
  MarathonEvent {
    id: 4,
    date: ymd(2024, 10, 15),
    name: "춘천마라톤",
    location: "춘천",
    distance: 42.195,
  },
  MarathonEvent {
    id: 5,
    date: ymd(2024, 11, 5),
    name: "제주국제마라톤",
    location: "제주",
    distance: 21.0975,
  },
  MarathonEvent {
    id: 6,
    date: ymd(2024, 11, 19),
    name: "광주마라톤",
    location: "광주",
    distance: 10.0,
  },
];
