//! Реестр путей REST API.
//!
//! Логические операции отображаются на пути бэкенда; query-строки
//! собираются из типизированных фильтров. Никакой логики кроме
//! построения путей здесь нет.

use chrono::NaiveDate;
use serde::Serialize;

// --- Аутентификация ---

pub fn login() -> &'static str {
    "/api/auth/login"
}

pub fn logout() -> &'static str {
    "/api/auth/logout"
}

pub fn me() -> &'static str {
    "/api/auth/me"
}

// --- Справочники ---

pub fn subjects() -> &'static str {
    "/api/subjects"
}

pub fn subject(id: i64) -> String {
    format!("/api/subjects/{}", id)
}

pub fn subject_objects(id: i64) -> String {
    format!("/api/subjects/{}/objects", id)
}

pub fn objects() -> &'static str {
    "/api/objects"
}

pub fn object(id: i64) -> String {
    format!("/api/objects/{}", id)
}

pub fn providers() -> &'static str {
    "/api/providers"
}

pub fn provider(id: i64) -> String {
    format!("/api/providers/{}", id)
}

pub fn users() -> &'static str {
    "/api/users"
}

pub fn user(id: i64) -> String {
    format!("/api/users/{}", id)
}

// --- Суточное планирование ---

pub fn days(filter: &DayFilter) -> String {
    format!("/api/days?{}", query(filter))
}

pub fn hours(filter: &DayFilter) -> String {
    format!("/api/hours?{}", query(filter))
}

pub fn day_status(filter: &DayFilter) -> String {
    format!("/api/days/status?{}", query(filter))
}

pub fn plan_calculate() -> &'static str {
    "/api/plan/calculate"
}

fn query<T: Serialize>(filter: &T) -> String {
    serde_qs::to_string(filter).unwrap_or_default()
}

/// Фильтр списочных запросов: дата плюс ровно один из идентификаторов
/// (субъект либо объект)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayFilter {
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<i64>,
}

impl DayFilter {
    pub fn subject(date: NaiveDate, id: i64) -> Self {
        Self {
            date,
            subject_id: Some(id),
            object_id: None,
        }
    }

    pub fn object(date: NaiveDate, id: i64) -> Self {
        Self {
            date,
            subject_id: None,
            object_id: Some(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn item_paths() {
        assert_eq!(subject(7), "/api/subjects/7");
        assert_eq!(subject_objects(7), "/api/subjects/7/objects");
        assert_eq!(user(3), "/api/users/3");
    }

    #[test]
    fn subject_filter_query() {
        let path = days(&DayFilter::subject(date(), 7));
        assert_eq!(path, "/api/days?date=2024-03-05&subjectId=7");
    }

    #[test]
    fn object_filter_query_omits_subject() {
        let path = hours(&DayFilter::object(date(), 12));
        assert_eq!(path, "/api/hours?date=2024-03-05&objectId=12");
    }

    #[test]
    fn status_path() {
        let path = day_status(&DayFilter::subject(date(), 7));
        assert!(path.starts_with("/api/days/status?"));
        assert!(path.contains("subjectId=7"));
    }
}
