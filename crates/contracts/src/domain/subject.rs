use serde::{Deserialize, Serialize};

// ============================================================================
// Subject — участник рынка
// ============================================================================

/// Тип субъекта рынка электроэнергии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectType {
    /// Энергопроизводящая организация
    #[serde(rename = "GENERATION")]
    Generation,
    /// Энергоснабжающая организация
    #[serde(rename = "SUPPLIER")]
    Supplier,
    /// Потребитель
    #[serde(rename = "CONSUMER")]
    Consumer,
}

impl SubjectType {
    pub fn display_name(&self) -> &'static str {
        match self {
            SubjectType::Generation => "ЭПО",
            SubjectType::Supplier => "ЭСО",
            SubjectType::Consumer => "Потребитель",
        }
    }

    pub fn all() -> [SubjectType; 3] {
        [
            SubjectType::Generation,
            SubjectType::Supplier,
            SubjectType::Consumer,
        ]
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            SubjectType::Generation => "GENERATION",
            SubjectType::Supplier => "SUPPLIER",
            SubjectType::Consumer => "CONSUMER",
        }
    }

    pub fn from_wire(s: &str) -> Option<SubjectType> {
        match s {
            "GENERATION" => Some(SubjectType::Generation),
            "SUPPLIER" => Some(SubjectType::Supplier),
            "CONSUMER" => Some(SubjectType::Consumer),
            _ => None,
        }
    }
}

/// Субъект рынка (участник торгов)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: i64,
    pub name: String,
    /// БИН — бизнес-идентификационный номер
    pub bin: String,
    #[serde(rename = "type")]
    pub subject_type: SubjectType,
    /// Идентификаторы закреплённых поставщиков
    #[serde(default)]
    pub providers: Vec<i64>,
}

impl Subject {
    /// Для генерирующих субъектов в отчётах выводятся колонки генерации
    pub fn is_generation(&self) -> bool {
        self.subject_type == SubjectType::Generation
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления субъекта
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDto {
    pub id: Option<i64>,
    pub name: String,
    pub bin: String,
    #[serde(rename = "type")]
    pub subject_type: Option<SubjectType>,
    #[serde(default)]
    pub providers: Vec<i64>,
}

impl SubjectDto {
    /// Валидация данных перед отправкой
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        let bin_digits: String = self.bin.chars().filter(|c| c.is_ascii_digit()).collect();
        if bin_digits.len() != 12 {
            return Err("БИН должен содержать 12 цифр".into());
        }
        if self.subject_type.is_none() {
            return Err("Не указан тип субъекта".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_short_bin() {
        let dto = SubjectDto {
            name: "АО Станция".into(),
            bin: "12345".into(),
            subject_type: Some(SubjectType::Generation),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn subject_type_wire_roundtrip() {
        for t in SubjectType::all() {
            assert_eq!(SubjectType::from_wire(t.as_wire()), Some(t));
        }
        assert_eq!(SubjectType::from_wire("UNKNOWN"), None);
    }
}
