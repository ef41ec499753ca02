use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ответ `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Ответ `GET /api/companies`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompaniesResponse {
    #[serde(default)]
    pub companies: Vec<String>,
}

/// Ответ `POST /api/email-summary`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailResponse {
    #[serde(default)]
    pub status: String,
    pub message: String,
}

/// Ответ `POST /api/chat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Тело ошибки бэкенда: `{"detail": ...}`.
///
/// `detail` is a plain string for handled errors and a list of objects for
/// request validation failures (HTTP 422), so it is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Value,
}

impl ErrorDetail {
    /// Текст ошибки, если сервер прислал его строкой
    pub fn message(&self) -> Option<&str> {
        match &self.detail {
            Value::String(s) if !s.trim().is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}
