use serde::{Deserialize, Serialize};

/// Поставщик (энергопередающая организация)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: i64,
    pub name: String,
    pub bin: String,
}

/// DTO для создания/обновления поставщика
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDto {
    pub id: Option<i64>,
    pub name: String,
    pub bin: String,
}

impl ProviderDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        let digits: String = self.bin.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.len() != 12 {
            return Err("БИН должен содержать 12 цифр".into());
        }
        Ok(())
    }
}
