pub mod request;
pub mod response;

pub use request::{ChatRequest, DownloadRequest, EmailRequest};
pub use response::{ChatResponse, CompaniesResponse, EmailResponse, ErrorDetail, HealthResponse};

/// Имя файла, под которым сохраняется архив выгрузки
pub const EXPORT_FILENAME: &str = "deal_submission_export.zip";
