//! Почасовая сетка суточного плана.
//!
//! Локальная модель ровно из 24 строк: индекс i соответствует часу i+1.
//! Сетка пересоздаётся при каждой смене выбора (дата/сущность) и после
//! успешной отправки, поэтому отображаемое состояние всегда отражает
//! сервер; несохранённые правки при смене выбора сознательно теряются.

use contracts::domain::hour::Hour;
use contracts::plan::{PlanValues, HOURS_PER_DAY};

/// Строка сетки: редактируемые входы плюс зеркальные поля с сервера
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourRow {
    // Редактируемые локально до явной отправки
    pub coefficient: f64,
    pub volume: f64,
    pub message: String,

    // Только для отображения, источник — сервер
    pub p1: f64,
    pub p2: f64,
    pub p3: f64,
    pub f1: f64,
    pub f2: f64,
    pub p1_gen: f64,
    pub p2_gen: f64,
    pub p3_gen: f64,
    pub f1_gen: f64,
    pub f2_gen: f64,
    pub p2_message: String,
}

impl From<&Hour> for HourRow {
    fn from(hour: &Hour) -> Self {
        Self {
            coefficient: hour.coefficient,
            volume: hour.volume,
            message: hour.message.clone(),
            p1: hour.p1,
            p2: hour.p2,
            p3: hour.p3,
            f1: hour.f1,
            f2: hour.f2,
            p1_gen: hour.p1_gen,
            p2_gen: hour.p2_gen,
            p3_gen: hour.p3_gen,
            f1_gen: hour.f1_gen,
            f2_gen: hour.f2_gen,
            p2_message: hour.p2_message.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlanGrid {
    rows: Vec<HourRow>,
}

impl Default for PlanGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanGrid {
    /// Пустой шаблон: 24 строки с нулями и пустыми строками
    pub fn new() -> Self {
        Self {
            rows: vec![HourRow::default(); HOURS_PER_DAY],
        }
    }

    /// Слияние записей сервера в шаблон по номеру часа.
    /// Часы вне 1..=24 пропускаются; при дубликатах побеждает последняя запись.
    pub fn from_hours(hours: &[Hour]) -> Self {
        let mut grid = Self::new();
        for hour in hours {
            if !hour.hour_in_range() {
                log::warn!("часовая запись с номером {} вне 1..=24, пропущена", hour.hour);
                continue;
            }
            grid.rows[(hour.hour - 1) as usize] = HourRow::from(hour);
        }
        grid
    }

    pub fn rows(&self) -> &[HourRow] {
        &self.rows
    }

    pub fn set_coefficient(&mut self, index: usize, value: f64) {
        if let Some(row) = self.rows.get_mut(index) {
            row.coefficient = value;
        }
    }

    pub fn set_volume(&mut self, index: usize, value: f64) {
        if let Some(row) = self.rows.get_mut(index) {
            row.volume = value;
        }
    }

    pub fn set_message(&mut self, index: usize, value: String) {
        if let Some(row) = self.rows.get_mut(index) {
            row.message = value;
        }
    }

    /// Отображаемое P2: рассчитанное сервером значение приоритетно,
    /// локальный вывод `round(P1 * коэффициент + объём, 2)` — только пока
    /// сервер ещё не прислал ненулевое P2
    pub fn p2_display(&self, index: usize) -> f64 {
        match self.rows.get(index) {
            Some(row) if row.p2 != 0.0 => row.p2,
            Some(row) => round2(row.p1 * row.coefficient + row.volume),
            None => 0.0,
        }
    }

    /// Массивы для отправки на расчётный endpoint, индекс = час - 1
    pub fn values(&self) -> PlanValues {
        PlanValues {
            volume: self.rows.iter().map(|r| r.volume).collect(),
            coefficient: self.rows.iter().map(|r| r.coefficient).collect(),
        }
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(n: u8) -> Hour {
        Hour {
            id: n as i64,
            day_id: 1,
            hour: n,
            ..Default::default()
        }
    }

    #[test]
    fn empty_grid_has_24_default_rows() {
        let grid = PlanGrid::new();
        assert_eq!(grid.rows().len(), 24);
        for row in grid.rows() {
            assert_eq!(row.coefficient, 0.0);
            assert_eq!(row.volume, 0.0);
            assert_eq!(row.p1, 0.0);
            assert_eq!(row.message, "");
            assert_eq!(row.p2_message, "");
        }
    }

    #[test]
    fn merge_places_hours_by_index() {
        let mut third = hour(3);
        third.p1 = 120.0;
        third.coefficient = 0.9;
        let mut last = hour(24);
        last.volume = 15.0;

        let grid = PlanGrid::from_hours(&[third, last]);
        assert_eq!(grid.rows()[2].p1, 120.0);
        assert_eq!(grid.rows()[2].coefficient, 0.9);
        assert_eq!(grid.rows()[23].volume, 15.0);
        // незаполненные слоты остаются шаблонными
        assert_eq!(grid.rows()[0], HourRow::default());
        assert_eq!(grid.rows()[10], HourRow::default());
    }

    #[test]
    fn merge_ignores_out_of_range_hours() {
        let mut bad = hour(25);
        bad.p1 = 99.0;
        let grid = PlanGrid::from_hours(&[hour(0), bad]);
        assert_eq!(grid.rows().len(), 24);
        assert!(grid.rows().iter().all(|r| r.p1 == 0.0));
    }

    #[test]
    fn merge_last_duplicate_wins() {
        let mut first = hour(5);
        first.p1 = 10.0;
        let mut second = hour(5);
        second.p1 = 20.0;
        let grid = PlanGrid::from_hours(&[first, second]);
        assert_eq!(grid.rows()[4].p1, 20.0);
    }

    #[test]
    fn p2_display_derives_when_server_p2_is_zero() {
        let mut h = hour(1);
        h.p1 = 100.0;
        let mut grid = PlanGrid::from_hours(&[h]);
        grid.set_coefficient(0, 1.5);
        grid.set_volume(0, 10.0);
        assert_eq!(grid.p2_display(0), 160.0);
    }

    #[test]
    fn p2_display_prefers_server_value() {
        let mut h = hour(1);
        h.p1 = 100.0;
        h.p2 = 155.5;
        let mut grid = PlanGrid::from_hours(&[h]);
        grid.set_coefficient(0, 1.5);
        grid.set_volume(0, 10.0);
        assert_eq!(grid.p2_display(0), 155.5);
    }

    #[test]
    fn p2_display_rounds_to_two_decimals() {
        let mut h = hour(1);
        h.p1 = 3.0;
        let mut grid = PlanGrid::from_hours(&[h]);
        grid.set_coefficient(0, 0.333);
        assert_eq!(grid.p2_display(0), 1.0);
    }

    #[test]
    fn mutators_ignore_out_of_range_index() {
        let mut grid = PlanGrid::new();
        grid.set_coefficient(24, 1.0);
        grid.set_volume(100, 1.0);
        assert!(grid.rows().iter().all(|r| r.coefficient == 0.0 && r.volume == 0.0));
    }

    #[test]
    fn values_are_indexed_by_hour() {
        let mut grid = PlanGrid::new();
        grid.set_coefficient(0, 1.5);
        grid.set_volume(23, 7.0);
        let values = grid.values();
        assert_eq!(values.volume.len(), 24);
        assert_eq!(values.coefficient.len(), 24);
        assert_eq!(values.coefficient[0], 1.5);
        assert_eq!(values.volume[23], 7.0);
        assert!(values.validate().is_ok());
    }
}
