use contracts::domain::object::{EnergyObject, EnergyObjectDto};

use crate::api::{endpoints, ApiClient, ApiError};

pub async fn fetch_objects() -> Result<Vec<EnergyObject>, ApiError> {
    ApiClient::from_window().get_json(endpoints::objects()).await
}

/// Объекты одного субъекта
pub async fn fetch_subject_objects(subject_id: i64) -> Result<Vec<EnergyObject>, ApiError> {
    ApiClient::from_window()
        .get_json(&endpoints::subject_objects(subject_id))
        .await
}

pub async fn fetch_object(id: i64) -> Result<EnergyObject, ApiError> {
    ApiClient::from_window()
        .get_json(&endpoints::object(id))
        .await
}

pub async fn save_object(dto: &EnergyObjectDto) -> Result<EnergyObject, ApiError> {
    let client = ApiClient::from_window();
    match dto.id {
        Some(id) => client.put_json(&endpoints::object(id), dto).await,
        None => client.post_json(endpoints::objects(), dto).await,
    }
}

pub async fn delete_object(id: i64) -> Result<(), ApiError> {
    ApiClient::from_window().delete(&endpoints::object(id)).await
}
