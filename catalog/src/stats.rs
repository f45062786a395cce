// Авторские права (c) 2025 urdekcah. Все права защищены.
//
// Этот исходный код распространяется под лицензией AGPL-3.0,
// текст которой находится в файле LICENSE в корневом каталоге данного проекта.
use crate::catalog::MarathonEvent;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
  pub total_marathons: usize,
  pub selected_marathons: usize,
  /// Summed over the whole catalog, not the current selection.
  pub total_distance: f64,
}

impl Stats {
  pub fn collect(catalog: &[MarathonEvent], filtered: &[&MarathonEvent]) -> Self {
    Self {
      total_marathons: catalog.len(),
      selected_marathons: filtered.len(),
      total_distance: catalog.iter().map(|m| m.distance).sum(),
    }
  }
}
