use serde::{Deserialize, Serialize};

/// Часовая запись суточного плана.
///
/// На каждую суточную запись приходится ровно 24 часа со значениями
/// `hour` 1..=24. Отсутствующие на бэкенде числовые поля приходят как 0,
/// текстовые — как пустая строка.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hour {
    pub id: i64,
    pub day_id: i64,
    /// Номер часа в сутках, 1..=24
    pub hour: u8,

    // Стадии плана/факта, МВт·ч
    #[serde(default)]
    pub p1: f64,
    #[serde(default)]
    pub p2: f64,
    #[serde(default)]
    pub p3: f64,
    #[serde(default)]
    pub f1: f64,
    #[serde(default)]
    pub f2: f64,

    // Генерация (заполняется только для генерирующих сущностей)
    #[serde(default)]
    pub p1_gen: f64,
    #[serde(default)]
    pub p2_gen: f64,
    #[serde(default)]
    pub p3_gen: f64,
    #[serde(default)]
    pub f1_gen: f64,
    #[serde(default)]
    pub f2_gen: f64,

    // Редактируемые пользователем входы
    #[serde(default)]
    pub coefficient: f64,
    #[serde(default)]
    pub volume: f64,

    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub p2_message: String,
}

impl Hour {
    pub fn hour_in_range(&self) -> bool {
        (1..=24).contains(&self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_zero_and_empty() {
        let hour: Hour = serde_json::from_str(r#"{"id":10,"dayId":3,"hour":5}"#).unwrap();
        assert_eq!(hour.hour, 5);
        assert_eq!(hour.p1, 0.0);
        assert_eq!(hour.coefficient, 0.0);
        assert_eq!(hour.volume, 0.0);
        assert_eq!(hour.message, "");
        assert_eq!(hour.p2_message, "");
    }

    #[test]
    fn camel_case_wire_names() {
        let hour: Hour = serde_json::from_str(
            r#"{"id":1,"dayId":2,"hour":1,"p1Gen":3.5,"p2Message":"расчёт"}"#,
        )
        .unwrap();
        assert_eq!(hour.p1_gen, 3.5);
        assert_eq!(hour.p2_message, "расчёт");
    }

    #[test]
    fn hour_range_check() {
        let mut hour = Hour::default();
        assert!(!hour.hour_in_range());
        hour.hour = 24;
        assert!(hour.hour_in_range());
        hour.hour = 25;
        assert!(!hour.hour_in_range());
    }
}
