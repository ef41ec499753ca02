//! Deal Submission - collaborator interfaces
//!
//! The session workflow only talks to the backend through [`DealApi`] and
//! only saves files through [`DownloadSink`], so both can be swapped for
//! in-memory fakes in tests.

use async_trait::async_trait;
use contracts::domain::a001_deal_submission::{ProcessFileRequest, ProcessingResult};
use contracts::shared::ApiError;
use contracts::usecases::u501_deal_submission::{
    ChatRequest, ChatResponse, CompaniesResponse, DownloadRequest, EmailRequest, EmailResponse,
    HealthResponse,
};

/// HTTP-контракт бэкенда ReHUB
#[async_trait(?Send)]
pub trait DealApi {
    async fn health(&self) -> Result<HealthResponse, ApiError>;

    async fn companies(&self) -> Result<CompaniesResponse, ApiError>;

    async fn process_file(&self, request: &ProcessFileRequest) -> Result<ProcessingResult, ApiError>;

    /// Возвращает байты zip-архива
    async fn download_export(&self, request: &DownloadRequest) -> Result<Vec<u8>, ApiError>;

    async fn email_summary(&self, request: &EmailRequest) -> Result<EmailResponse, ApiError>;

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError>;
}

/// Сохранение файла на стороне пользователя
pub trait DownloadSink {
    fn save(&self, filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String>;
}
