use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Число часовых интервалов в сутках
pub const HOURS_PER_DAY: usize = 24;

/// Назначение отправки плана на расчётный endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanIntent {
    /// Сохранить введённые значения без согласования
    Save,
    /// Рассчитать и согласовать план
    Approve,
}

/// Почасовые массивы плана; индекс = час - 1
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanValues {
    pub volume: Vec<f64>,
    pub coefficient: Vec<f64>,
}

impl PlanValues {
    pub fn validate(&self) -> Result<(), String> {
        if self.volume.len() != HOURS_PER_DAY || self.coefficient.len() != HOURS_PER_DAY {
            return Err(format!(
                "План должен содержать {} часовых значений",
                HOURS_PER_DAY
            ));
        }
        Ok(())
    }
}

/// Полезная нагрузка запроса сохранения/согласования суточного плана
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSubmission {
    pub intent: PlanIntent,
    pub subject_id: i64,
    pub date: NaiveDate,
    pub plan: PlanValues,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_wire_shape() {
        let submission = PlanSubmission {
            intent: PlanIntent::Approve,
            subject_id: 7,
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            plan: PlanValues {
                volume: vec![0.0; HOURS_PER_DAY],
                coefficient: vec![1.0; HOURS_PER_DAY],
            },
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["intent"], "approve");
        assert_eq!(json["subjectId"], 7);
        assert_eq!(json["date"], "2024-03-05");
        assert_eq!(json["plan"]["volume"].as_array().unwrap().len(), 24);
    }

    #[test]
    fn values_length_is_enforced() {
        let values = PlanValues {
            volume: vec![0.0; 23],
            coefficient: vec![0.0; HOURS_PER_DAY],
        };
        assert!(values.validate().is_err());
    }
}
