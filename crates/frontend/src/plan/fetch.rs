//! Загрузка суточных данных и статусов плана.

use chrono::NaiveDate;
use contracts::domain::day::{Day, DayStatus};
use contracts::domain::hour::Hour;

use crate::api::endpoints::{self, DayFilter};
use crate::api::{ApiClient, ApiError};

/// Сущность планирования: субъект либо его объект
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Subject(i64),
    Object(i64),
}

impl EntityRef {
    pub fn id(&self) -> i64 {
        match self {
            EntityRef::Subject(id) | EntityRef::Object(id) => *id,
        }
    }

    pub fn filter(&self, date: NaiveDate) -> DayFilter {
        match self {
            EntityRef::Subject(id) => DayFilter::subject(date, *id),
            EntityRef::Object(id) => DayFilter::object(date, *id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PlanData {
    pub days: Vec<Day>,
    pub hours: Vec<Hour>,
}

/// Суточная запись и её часы для одной сущности на одну дату.
///
/// 404 на списочных endpoint'ах означает "данных ещё нет" и превращается
/// в пустой список; любая другая ошибка уходит вызывающему. Запрос часов
/// выполняется только после непустого ответа по суткам.
pub async fn fetch_plan(
    client: &ApiClient,
    date: NaiveDate,
    entity: EntityRef,
) -> Result<PlanData, ApiError> {
    let filter = entity.filter(date);

    let days: Vec<Day> = match client.get_json(&endpoints::days(&filter)).await {
        Ok(days) => days,
        Err(e) if e.is_not_found() => Vec::new(),
        Err(e) => return Err(e),
    };

    if days.is_empty() {
        return Ok(PlanData::default());
    }

    let hours: Vec<Hour> = match client.get_json(&endpoints::hours(&filter)).await {
        Ok(hours) => hours,
        Err(e) if e.is_not_found() => Vec::new(),
        Err(e) => return Err(e),
    };

    Ok(PlanData { days, hours })
}

/// Статус плана одной сущности.
///
/// Любой сбой деградирует до сентинела `Unavailable`: пакет параллельных
/// запросов статусов не должен обрываться из-за одной сущности.
pub async fn fetch_status(client: &ApiClient, date: NaiveDate, entity: EntityRef) -> DayStatus {
    match client
        .get_json::<DayStatus>(&endpoints::day_status(&entity.filter(date)))
        .await
    {
        Ok(status) => status,
        Err(e) => {
            log::error!("статус сущности {} на {}: {}", entity.id(), date, e);
            DayStatus::Unavailable
        }
    }
}
