use contracts::domain::provider::{Provider, ProviderDto};

use crate::api::{endpoints, ApiClient, ApiError};

pub async fn fetch_providers() -> Result<Vec<Provider>, ApiError> {
    ApiClient::from_window()
        .get_json(endpoints::providers())
        .await
}

pub async fn save_provider(dto: &ProviderDto) -> Result<Provider, ApiError> {
    let client = ApiClient::from_window();
    match dto.id {
        Some(id) => client.put_json(&endpoints::provider(id), dto).await,
        None => client.post_json(endpoints::providers(), dto).await,
    }
}

pub async fn delete_provider(id: i64) -> Result<(), ApiError> {
    ApiClient::from_window()
        .delete(&endpoints::provider(id))
        .await
}
