//! Форматирование и арифметика календарных дат.
//! На проводе всегда ISO `YYYY-MM-DD`, пользователю показывается `DD.MM.YYYY`.

use chrono::{Duration, NaiveDate, Utc};

/// "2024-03-15" -> "15.03.2024"; не-ISO строка возвращается как есть
pub fn format_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Сегодняшняя дата в ISO-формате
pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Сдвиг ISO-даты на заданное число суток; не-ISO строка возвращается как есть
pub fn shift_iso_date(date_str: &str, days: i64) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => (date + Duration::days(days)).format("%Y-%m-%d").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Разбор ISO-даты с сообщением для формы
pub fn parse_iso_date(date_str: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| format!("Некорректная дата: {}", date_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_shift_iso_date() {
        assert_eq!(shift_iso_date("2024-03-01", -1), "2024-02-29");
        assert_eq!(shift_iso_date("2024-12-31", 1), "2025-01-01");
        assert_eq!(shift_iso_date("oops", 1), "oops");
    }

    #[test]
    fn test_parse_iso_date() {
        assert!(parse_iso_date("2024-03-05").is_ok());
        assert!(parse_iso_date("05.03.2024").is_err());
    }
}
