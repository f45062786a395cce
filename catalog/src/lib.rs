// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
pub mod calendar;
pub mod catalog;
pub mod filter;
pub mod stats;

pub use calendar::{days_in_month, draw_calendar};
pub use catalog::{MarathonEvent, MARATHONS};
pub use filter::{filter_marathons, FilterCriteria};
pub use stats::Stats;
