use contracts::domain::subject::{Subject, SubjectDto};

use crate::api::{endpoints, ApiClient, ApiError};

pub async fn fetch_subjects() -> Result<Vec<Subject>, ApiError> {
    ApiClient::from_window()
        .get_json(endpoints::subjects())
        .await
}

pub async fn fetch_subject(id: i64) -> Result<Subject, ApiError> {
    ApiClient::from_window()
        .get_json(&endpoints::subject(id))
        .await
}

/// Создание либо обновление по наличию id в DTO
pub async fn save_subject(dto: &SubjectDto) -> Result<Subject, ApiError> {
    let client = ApiClient::from_window();
    match dto.id {
        Some(id) => client.put_json(&endpoints::subject(id), dto).await,
        None => client.post_json(endpoints::subjects(), dto).await,
    }
}

pub async fn delete_subject(id: i64) -> Result<(), ApiError> {
    ApiClient::from_window()
        .delete(&endpoints::subject(id))
        .await
}
