//! Построение адресов API бэкенда

/// Порт бэкенда; протокол и хост берутся из window.location
const BACKEND_PORT: u16 = 8080;

/// Базовый адрес API, например "http://localhost:8080".
/// Пустая строка, если window недоступен.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}
