use contracts::system::users::{CreateUserDto, UpdateUserDto, User};

use crate::api::{endpoints, ApiClient, ApiError};

pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    ApiClient::from_window().get_json(endpoints::users()).await
}

pub async fn create_user(dto: &CreateUserDto) -> Result<User, ApiError> {
    ApiClient::from_window()
        .post_json(endpoints::users(), dto)
        .await
}

pub async fn update_user(dto: &UpdateUserDto) -> Result<User, ApiError> {
    ApiClient::from_window()
        .put_json(&endpoints::user(dto.id), dto)
        .await
}

pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    ApiClient::from_window().delete(&endpoints::user(id)).await
}
