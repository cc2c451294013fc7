use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::api::{endpoints, ApiClient, ApiError};

/// Вход по логину и паролю
pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    ApiClient::from_window()
        .post_json(endpoints::login(), &request)
        .await
}

/// Отзыв токена на сервере; локальная очистка выполняется вызывающим
pub async fn logout() -> Result<(), ApiError> {
    let status = ApiClient::from_window()
        .post_for_status(endpoints::logout(), &serde_json::json!({}))
        .await?;
    if status == 200 || status == 204 {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

/// Текущий пользователь по токену
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    ApiClient::from_window().get_json(endpoints::me()).await
}
