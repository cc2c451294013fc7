use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Статус суточного плана.
///
/// Стадии жизненного цикла в порядке прохождения: первичный план →
/// план с коэффициентами → окончательный план → факт-1 → факт-2 → завершён.
/// `Unavailable` — клиентский сентинел: статус не удалось получить либо
/// бэкенд прислал неизвестное значение.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayStatus {
    Primary,
    Adjusted,
    Final,
    Fact1,
    Fact2,
    Completed,
    Unavailable,
}

impl DayStatus {
    pub fn as_wire(&self) -> &'static str {
        match self {
            DayStatus::Primary => "PRIMARY",
            DayStatus::Adjusted => "ADJUSTED",
            DayStatus::Final => "FINAL",
            DayStatus::Fact1 => "FACT_1",
            DayStatus::Fact2 => "FACT_2",
            DayStatus::Completed => "COMPLETED",
            DayStatus::Unavailable => "UNAVAILABLE",
        }
    }

    /// Неизвестное значение с провода деградирует до сентинела,
    /// а не до ошибки разбора
    pub fn from_wire(s: &str) -> DayStatus {
        match s {
            "PRIMARY" => DayStatus::Primary,
            "ADJUSTED" => DayStatus::Adjusted,
            "FINAL" => DayStatus::Final,
            "FACT_1" => DayStatus::Fact1,
            "FACT_2" => DayStatus::Fact2,
            "COMPLETED" => DayStatus::Completed,
            _ => DayStatus::Unavailable,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DayStatus::Primary => "Первичный план",
            DayStatus::Adjusted => "План с коэффициентами",
            DayStatus::Final => "Окончательный план",
            DayStatus::Fact1 => "Факт 1",
            DayStatus::Fact2 => "Факт 2",
            DayStatus::Completed => "Завершён",
            DayStatus::Unavailable => "Недоступен",
        }
    }

    /// Порядковый номер стадии; сентинел вне шкалы
    pub fn stage_index(&self) -> Option<u8> {
        match self {
            DayStatus::Primary => Some(0),
            DayStatus::Adjusted => Some(1),
            DayStatus::Final => Some(2),
            DayStatus::Fact1 => Some(3),
            DayStatus::Fact2 => Some(4),
            DayStatus::Completed => Some(5),
            DayStatus::Unavailable => None,
        }
    }
}

impl Serialize for DayStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for DayStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(DayStatus::from_wire(&value))
    }
}

/// Суточная запись плана для одного субъекта либо объекта.
/// Создаётся на бэкенде при первой записи; на пару (дата, сущность)
/// существует не более одной записи.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    pub id: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub subject_id: Option<i64>,
    #[serde(default)]
    pub object_id: Option<i64>,
    pub status: DayStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_status_parses() {
        let day: Day = serde_json::from_str(
            r#"{"id":1,"date":"2024-03-05","subjectId":7,"status":"ADJUSTED"}"#,
        )
        .unwrap();
        assert_eq!(day.status, DayStatus::Adjusted);
        assert_eq!(day.subject_id, Some(7));
        assert_eq!(day.object_id, None);
    }

    #[test]
    fn unknown_status_maps_to_unavailable() {
        let status: DayStatus = serde_json::from_str(r#""SOMETHING_NEW""#).unwrap();
        assert_eq!(status, DayStatus::Unavailable);
    }

    #[test]
    fn wire_round_trip() {
        for status in [
            DayStatus::Primary,
            DayStatus::Adjusted,
            DayStatus::Final,
            DayStatus::Fact1,
            DayStatus::Fact2,
            DayStatus::Completed,
        ] {
            assert_eq!(DayStatus::from_wire(status.as_wire()), status);
        }
    }

    #[test]
    fn stage_order_is_monotonic() {
        let stages = [
            DayStatus::Primary,
            DayStatus::Adjusted,
            DayStatus::Final,
            DayStatus::Fact1,
            DayStatus::Fact2,
            DayStatus::Completed,
        ];
        for pair in stages.windows(2) {
            assert!(pair[0].stage_index() < pair[1].stage_index());
        }
    }
}
