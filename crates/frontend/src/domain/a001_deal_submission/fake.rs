//! In-memory collaborator for workflow tests.

use super::api::{DealApi, DownloadSink};
use async_trait::async_trait;
use contracts::domain::a001_deal_submission::{ProcessFileRequest, ProcessingResult};
use contracts::shared::ApiError;
use contracts::usecases::u501_deal_submission::{
    ChatRequest, ChatResponse, CompaniesResponse, DownloadRequest, EmailRequest, EmailResponse,
    HealthResponse,
};
use std::cell::RefCell;
use std::collections::VecDeque;

type Replies<T> = RefCell<VecDeque<Result<T, ApiError>>>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CallCounts {
    pub health: usize,
    pub companies: usize,
    pub process_file: usize,
    pub download: usize,
    pub email: usize,
    pub chat: usize,
}

#[derive(Default)]
pub struct FakeDealApi {
    health: Replies<HealthResponse>,
    companies: Replies<CompaniesResponse>,
    process: Replies<ProcessingResult>,
    download: Replies<Vec<u8>>,
    email: Replies<EmailResponse>,
    chat: Replies<ChatResponse>,
    calls: RefCell<CallCounts>,
    chat_requests: RefCell<Vec<ChatRequest>>,
    process_requests: RefCell<Vec<ProcessFileRequest>>,
    /// Вызываются внутри запроса до ответа: имитируют действия пользователя во время запроса
    during_chat: Hook,
    during_email: Hook,
    during_download: Hook,
}

type Hook = RefCell<Option<Box<dyn Fn()>>>;

fn run(hook: &Hook) {
    if let Some(hook) = hook.borrow().as_ref() {
        hook();
    }
}

fn next<T>(queue: &Replies<T>) -> Result<T, ApiError> {
    queue
        .borrow_mut()
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::Network("no reply queued".into())))
}

impl FakeDealApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn health_replies(&self, replies: Vec<Result<HealthResponse, ApiError>>) {
        self.health.borrow_mut().extend(replies);
    }

    pub fn companies_replies(&self, replies: Vec<Result<CompaniesResponse, ApiError>>) {
        self.companies.borrow_mut().extend(replies);
    }

    pub fn process_replies(&self, replies: Vec<Result<ProcessingResult, ApiError>>) {
        self.process.borrow_mut().extend(replies);
    }

    pub fn download_replies(&self, replies: Vec<Result<Vec<u8>, ApiError>>) {
        self.download.borrow_mut().extend(replies);
    }

    pub fn email_replies(&self, replies: Vec<Result<EmailResponse, ApiError>>) {
        self.email.borrow_mut().extend(replies);
    }

    pub fn chat_replies(&self, replies: Vec<Result<ChatResponse, ApiError>>) {
        self.chat.borrow_mut().extend(replies);
    }

    pub fn during_chat(&self, hook: impl Fn() + 'static) {
        *self.during_chat.borrow_mut() = Some(Box::new(hook));
    }

    pub fn during_email(&self, hook: impl Fn() + 'static) {
        *self.during_email.borrow_mut() = Some(Box::new(hook));
    }

    pub fn during_download(&self, hook: impl Fn() + 'static) {
        *self.during_download.borrow_mut() = Some(Box::new(hook));
    }

    pub fn calls(&self) -> CallCounts {
        *self.calls.borrow()
    }

    pub fn chat_requests(&self) -> Vec<ChatRequest> {
        self.chat_requests.borrow().clone()
    }

    pub fn process_requests(&self) -> Vec<ProcessFileRequest> {
        self.process_requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl DealApi for FakeDealApi {
    async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.calls.borrow_mut().health += 1;
        next(&self.health)
    }

    async fn companies(&self) -> Result<CompaniesResponse, ApiError> {
        self.calls.borrow_mut().companies += 1;
        next(&self.companies)
    }

    async fn process_file(&self, request: &ProcessFileRequest) -> Result<ProcessingResult, ApiError> {
        self.calls.borrow_mut().process_file += 1;
        self.process_requests.borrow_mut().push(request.clone());
        next(&self.process)
    }

    async fn download_export(&self, _request: &DownloadRequest) -> Result<Vec<u8>, ApiError> {
        self.calls.borrow_mut().download += 1;
        run(&self.during_download);
        next(&self.download)
    }

    async fn email_summary(&self, _request: &EmailRequest) -> Result<EmailResponse, ApiError> {
        self.calls.borrow_mut().email += 1;
        run(&self.during_email);
        next(&self.email)
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.calls.borrow_mut().chat += 1;
        self.chat_requests.borrow_mut().push(request.clone());
        run(&self.during_chat);
        next(&self.chat)
    }
}

/// Запоминает сохранённые файлы вместо скачивания
#[derive(Default)]
pub struct RecordingSink {
    pub saved: RefCell<Vec<(String, String, Vec<u8>)>>,
    pub fail: bool,
}

impl DownloadSink for RecordingSink {
    fn save(&self, filename: &str, mime: &str, bytes: &[u8]) -> Result<(), String> {
        if self.fail {
            return Err("download blocked".to_string());
        }
        self.saved
            .borrow_mut()
            .push((filename.to_string(), mime.to_string(), bytes.to_vec()));
        Ok(())
    }
}
