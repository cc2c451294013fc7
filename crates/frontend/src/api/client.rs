//! HTTP-клиент для обращений к бэкенду.
//!
//! Единственная обязанность клиента — подстановка bearer-токена в исходящие
//! запросы; без ретраев, таймаутов и прочей политики. Все операции возвращают
//! `Result<_, ApiError>`: решение о том, деградирует ли ошибка до пустого
//! списка, сентинела или баннера, принимает вызывающая сторона.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::rc::Rc;
use thiserror::Error;

use crate::shared::api_utils::api_base;
use crate::system::auth::storage;

#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("сетевая ошибка: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("не удалось разобрать ответ: {0}")]
    Decode(String),
}

impl ApiError {
    /// Списочные endpoint'ы бэкенда отвечают 404 при отсутствии данных
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status(404))
    }
}

/// Источник учётных данных для исходящих запросов.
/// Боевая реализация читает localStorage; в тестах подставляется стаб,
/// поэтому жизненный цикл токена проверяется без браузерного хранилища.
pub trait TokenProvider {
    fn access_token(&self) -> Option<String>;
}

/// Токен из localStorage (пишется только потоком аутентификации)
pub struct StorageTokenProvider;

impl TokenProvider for StorageTokenProvider {
    fn access_token(&self) -> Option<String> {
        storage::get_access_token()
    }
}

pub fn bearer_value(token: &str) -> String {
    format!("Bearer {}", token)
}

#[derive(Clone)]
pub struct ApiClient {
    base: String,
    tokens: Rc<dyn TokenProvider>,
}

impl ApiClient {
    pub fn new(base: String, tokens: Rc<dyn TokenProvider>) -> Self {
        Self { base, tokens }
    }

    /// Клиент с адресом из window.location и токеном из localStorage
    pub fn from_window() -> Self {
        Self::new(api_base(), Rc::new(StorageTokenProvider))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Токена нет — запрос уходит неаутентифицированным, отказ решает сервер
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.access_token() {
            Some(token) => request.header("Authorization", &bearer_value(&token)),
            None => request,
        }
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST, когда вызывающему важен только код ответа
    pub async fn post_for_status<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<u16, ApiError> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(response.status())
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .authorize(Request::put(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .authorize(Request::delete(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubTokens(Option<&'static str>);

    impl TokenProvider for StubTokens {
        fn access_token(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    #[test]
    fn bearer_header_format() {
        assert_eq!(bearer_value("abc123"), "Bearer abc123");
    }

    #[test]
    fn injected_provider_is_used() {
        let client = ApiClient::new(
            "http://localhost:8080".into(),
            Rc::new(StubTokens(Some("t-1"))),
        );
        assert_eq!(client.tokens.access_token().as_deref(), Some("t-1"));

        let anonymous = ApiClient::new("http://localhost:8080".into(), Rc::new(StubTokens(None)));
        assert_eq!(anonymous.tokens.access_token(), None);
    }

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient::new("http://localhost:8080".into(), Rc::new(StubTokens(None)));
        assert_eq!(
            client.url("/api/subjects"),
            "http://localhost:8080/api/subjects"
        );
    }

    #[test]
    fn not_found_predicate() {
        assert!(ApiError::Status(404).is_not_found());
        assert!(!ApiError::Status(500).is_not_found());
        assert!(!ApiError::Network("offline".into()).is_not_found());
    }
}
