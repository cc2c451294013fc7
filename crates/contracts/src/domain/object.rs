use serde::{Deserialize, Serialize};

/// Тип объекта (точки учёта)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectType {
    #[serde(rename = "GENERATION")]
    Generation,
    #[serde(rename = "CONSUMPTION")]
    Consumption,
}

impl ObjectType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ObjectType::Generation => "Генерация",
            ObjectType::Consumption => "Потребление",
        }
    }
}

/// Объект — точка коммерческого учёта, принадлежащая субъекту
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyObject {
    pub id: i64,
    pub name: String,
    /// EIC-код точки учёта (16 символов)
    pub eic_code: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    /// Владеющий субъект
    pub subject_id: i64,
    /// Зона энергосистемы (Север/Юг/Запад)
    #[serde(default)]
    pub zone: String,
}

impl EnergyObject {
    pub fn is_generation(&self) -> bool {
        self.object_type == ObjectType::Generation
    }
}

/// DTO для создания/обновления объекта
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EnergyObjectDto {
    pub id: Option<i64>,
    pub name: String,
    pub eic_code: String,
    #[serde(rename = "type")]
    pub object_type: Option<ObjectType>,
    pub subject_id: Option<i64>,
    pub zone: String,
}

impl EnergyObjectDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        // EIC-код фиксированной длины, допускаем пустой до присвоения кода
        if !self.eic_code.trim().is_empty() && self.eic_code.trim().len() != 16 {
            return Err("EIC-код должен содержать 16 символов".into());
        }
        if self.subject_id.is_none() {
            return Err("Не указан владеющий субъект".into());
        }
        Ok(())
    }
}
