//! Кодек табличного формата плана: трёхколоночный лист для массового
//! ввода коэффициентов и объёмов.

use thiserror::Error;

use super::grid::PlanGrid;
use contracts::plan::HOURS_PER_DAY;

/// Заголовок листа. При импорте сравнение чувствительно к регистру
/// и написанию: любое отклонение отклоняет файл целиком.
pub const SHEET_HEADERS: [&str; 3] = ["Hour", "Coefficient", "Volume"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportError {
    #[error("Файл пуст")]
    Empty,
    #[error("Неверный заголовок листа: ожидается \"{expected}\", получено \"{found}\"")]
    HeaderMismatch { expected: String, found: String },
}

fn expected_header() -> String {
    SHEET_HEADERS.join(", ")
}

/// Лист выгрузки: заголовок и 24 строки в порядке часов (1..=24)
pub fn export_rows(grid: &PlanGrid) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(HOURS_PER_DAY + 1);
    rows.push(SHEET_HEADERS.iter().map(|h| h.to_string()).collect());
    for (i, row) in grid.rows().iter().enumerate() {
        rows.push(vec![
            (i + 1).to_string(),
            row.coefficient.to_string(),
            row.volume.to_string(),
        ]);
    }
    rows
}

/// Импорт листа в свежий 24-строчный шаблон.
///
/// Слияния с текущими данными нет: строки файла переопределяют только
/// коэффициент и объём соответствующего часа, остальные часы остаются
/// шаблонными нулями. Некорректная строка данных пропускается с
/// предупреждением в журнале, остальные строки при этом применяются.
pub fn import_rows(raw: &[Vec<String>]) -> Result<PlanGrid, ImportError> {
    let header = raw.first().ok_or(ImportError::Empty)?;
    if !header_matches(header) {
        return Err(ImportError::HeaderMismatch {
            expected: expected_header(),
            found: header.join(", "),
        });
    }

    let mut grid = PlanGrid::new();
    for (line, row) in raw.iter().enumerate().skip(1) {
        if row.len() < 3 {
            log::warn!("строка {}: меньше трёх колонок, пропущена", line + 1);
            continue;
        }
        let parsed = (
            parse_number(&row[0]),
            parse_number(&row[1]),
            parse_number(&row[2]),
        );
        let (Some(hour), Some(coefficient), Some(volume)) = parsed else {
            log::warn!("строка {}: нечисловое значение, пропущена", line + 1);
            continue;
        };
        if hour.fract() != 0.0 || !(1.0..=24.0).contains(&hour) {
            log::warn!(
                "строка {}: час {} вне диапазона 1..=24, пропущена",
                line + 1,
                hour
            );
            continue;
        }
        let index = hour as usize - 1;
        grid.set_coefficient(index, coefficient);
        grid.set_volume(index, volume);
    }
    Ok(grid)
}

/// Первые три ячейки совпадают с SHEET_HEADERS, хвостовые ячейки
/// допускаются только пустыми (SheetJS дополняет строки до ширины листа)
fn header_matches(header: &[String]) -> bool {
    let trimmed: Vec<&str> = header.iter().map(|c| c.trim()).collect();
    if trimmed.len() < SHEET_HEADERS.len() {
        return false;
    }
    if trimmed[..SHEET_HEADERS.len()] != SHEET_HEADERS {
        return false;
    }
    trimmed[SHEET_HEADERS.len()..].iter().all(|c| c.is_empty())
}

/// Числовая ячейка; запятая допускается как десятичный разделитель
fn parse_number(cell: &str) -> Option<f64> {
    let cleaned = cell.trim().replace(',', ".");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::grid::HourRow;
    use contracts::domain::hour::Hour;

    fn rows(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn export_import_round_trip() {
        let mut grid = PlanGrid::new();
        grid.set_coefficient(0, 1.5);
        grid.set_volume(0, 10.0);
        grid.set_coefficient(11, 0.85);
        grid.set_volume(23, -4.0);

        let imported = import_rows(&export_rows(&grid)).unwrap();
        assert_eq!(imported.values().coefficient, grid.values().coefficient);
        assert_eq!(imported.values().volume, grid.values().volume);
    }

    #[test]
    fn import_resets_read_only_fields() {
        let mut server_hour = Hour {
            id: 1,
            day_id: 1,
            hour: 1,
            p1: 100.0,
            ..Default::default()
        };
        server_hour.coefficient = 1.2;
        let grid = PlanGrid::from_hours(&[server_hour]);

        let imported = import_rows(&export_rows(&grid)).unwrap();
        // коэффициент пережил цикл, зеркальные поля вернулись к шаблону
        assert_eq!(imported.rows()[0].coefficient, 1.2);
        assert_eq!(imported.rows()[0].p1, 0.0);
    }

    #[test]
    fn header_mismatch_rejects_whole_file() {
        let err = import_rows(&rows(&[
            &["Час", "Коэффициент", "Объём"],
            &["1", "1.5", "10"],
        ]))
        .unwrap_err();
        match &err {
            ImportError::HeaderMismatch { expected, .. } => {
                assert_eq!(expected, "Hour, Coefficient, Volume");
            }
            other => panic!("неожиданная ошибка: {:?}", other),
        }
        assert!(err.to_string().contains("Hour, Coefficient, Volume"));
    }

    #[test]
    fn header_is_case_sensitive() {
        assert!(import_rows(&rows(&[&["hour", "coefficient", "volume"]])).is_err());
    }

    #[test]
    fn empty_file_is_rejected() {
        assert_eq!(import_rows(&[]).unwrap_err(), ImportError::Empty);
    }

    #[test]
    fn trailing_empty_header_cells_are_tolerated() {
        let grid = import_rows(&rows(&[
            &["Hour", "Coefficient", "Volume", ""],
            &["2", "1.1", "5"],
        ]))
        .unwrap();
        assert_eq!(grid.rows()[1].coefficient, 1.1);
    }

    #[test]
    fn malformed_rows_are_dropped_but_valid_rows_apply() {
        let grid = import_rows(&rows(&[
            &["Hour", "Coefficient", "Volume"],
            &["1", "1.5"],             // мало колонок
            &["2", "abc", "10"],       // нечисловая ячейка
            &["25", "1.0", "10"],      // час вне диапазона
            &["0", "1.0", "10"],       // час вне диапазона
            &["3", "0.9", "12"],       // корректная строка
        ]))
        .unwrap();

        assert_eq!(grid.rows()[0], HourRow::default());
        assert_eq!(grid.rows()[1], HourRow::default());
        assert_eq!(grid.rows()[2].coefficient, 0.9);
        assert_eq!(grid.rows()[2].volume, 12.0);
    }

    #[test]
    fn comma_decimal_separator_is_accepted() {
        let grid = import_rows(&rows(&[
            &["Hour", "Coefficient", "Volume"],
            &["4", "1,25", "8"],
        ]))
        .unwrap();
        assert_eq!(grid.rows()[3].coefficient, 1.25);
    }
}
