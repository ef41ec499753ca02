use crate::usecases::u501_deal_submission::ErrorDetail;
use thiserror::Error;

/// Ошибки обращения к бэкенду
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Сервер отказал и прислал текст ошибки в `detail`
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    /// Неуспешный статус без пригодного `detail`
    #[error("HTTP {status}")]
    Status { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Builds the error for a non-2xx reply from its (optional) JSON body.
    pub fn from_response(status: u16, body: Option<&ErrorDetail>) -> Self {
        match body.and_then(ErrorDetail::message) {
            Some(detail) => ApiError::Rejected {
                status,
                detail: detail.to_string(),
            },
            None => ApiError::Status { status },
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Rejected { status, .. } | ApiError::Status { status } => Some(*status),
            _ => None,
        }
    }

    /// Имеет ли смысл повторять запрос
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Network(_) | ApiError::Timeout(_) => true,
            ApiError::Rejected { status, .. } | ApiError::Status { status } => *status >= 500,
            ApiError::Decode(_) => false,
        }
    }

    /// Текст для пользователя: `detail` сервера как есть, иначе общий текст
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { detail, .. } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}
