//! HTTP client of the ReHUB backend (gloo-net).
//!
//! Every call goes through [`HttpDealApi::call`]: per-endpoint timeout,
//! bounded retry for idempotent reads, and one mapping of non-2xx replies
//! to [`ApiError`].

use crate::domain::a001_deal_submission::api::DealApi;
use crate::shared::retry::{with_retry, with_timeout};
use async_trait::async_trait;
use contracts::domain::a001_deal_submission::{ProcessFileRequest, ProcessingResult};
use contracts::shared::{ApiConfig, ApiError, Endpoint};
use contracts::usecases::u501_deal_submission::{
    ChatRequest, ChatResponse, CompaniesResponse, DownloadRequest, EmailRequest, EmailResponse,
    ErrorDetail, HealthResponse,
};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

#[derive(Debug, Clone)]
pub struct HttpDealApi {
    config: ApiConfig,
}

impl HttpDealApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn call<T, F, Fut>(&self, endpoint: Endpoint, send: F) -> Result<T, ApiError>
    where
        F: Fn(String) -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        let policy = self.config.policy(endpoint);
        let url = self.config.url(endpoint);
        with_retry(
            policy,
            |attempt| {
                log::debug!("{} (attempt {})", url, attempt);
                with_timeout(
                    policy.timeout_ms,
                    send(url.clone()),
                    TimeoutFuture::new(policy.timeout_ms),
                )
            },
            TimeoutFuture::new,
        )
        .await
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(format!("{e:?}"))
}

/// Пропускает 2xx, остальное превращает в ошибку с `detail`, если он есть
async fn check(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.json::<ErrorDetail>().await.ok();
    Err(ApiError::from_response(status, body.as_ref()))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    check(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(url: String) -> Result<T, ApiError> {
    let response = Request::get(&url).send().await.map_err(network)?;
    read_json(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: String, body: &B) -> Result<T, ApiError> {
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| ApiError::Decode(format!("request body: {}", e)))?
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}

/// multipart: `file`, `company`, `deal_name`
fn multipart(request: &ProcessFileRequest) -> Result<FormData, ApiError> {
    let bytes = js_sys::Uint8Array::from(request.file.bytes.as_slice());
    let parts = js_sys::Array::new();
    parts.push(&bytes);

    let properties = BlobPropertyBag::new();
    if !request.file.content_type.is_empty() {
        properties.set_type(&request.file.content_type);
    }
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &properties).map_err(js_error)?;

    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", &blob, &request.file.name)
        .map_err(js_error)?;
    form.append_with_str("company", &request.company)
        .map_err(js_error)?;
    form.append_with_str("deal_name", &request.deal_name)
        .map_err(js_error)?;
    Ok(form)
}

#[async_trait(?Send)]
impl DealApi for HttpDealApi {
    async fn health(&self) -> Result<HealthResponse, ApiError> {
        self.call(Endpoint::Health, get_json).await
    }

    async fn companies(&self) -> Result<CompaniesResponse, ApiError> {
        self.call(Endpoint::Companies, get_json).await
    }

    async fn process_file(&self, request: &ProcessFileRequest) -> Result<ProcessingResult, ApiError> {
        self.call(Endpoint::ProcessFile, |url| async move {
            let form = multipart(request)?;
            let response = Request::post(&url)
                .body(form)
                .map_err(network)?
                .send()
                .await
                .map_err(network)?;
            read_json(response).await
        })
        .await
    }

    async fn download_export(&self, request: &DownloadRequest) -> Result<Vec<u8>, ApiError> {
        self.call(Endpoint::DownloadExport, |url| async move {
            let response = Request::post(&url)
                .json(request)
                .map_err(|e| ApiError::Decode(format!("request body: {}", e)))?
                .send()
                .await
                .map_err(network)?;
            check(response)
                .await?
                .binary()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        })
        .await
    }

    async fn email_summary(&self, request: &EmailRequest) -> Result<EmailResponse, ApiError> {
        self.call(Endpoint::EmailSummary, |url| post_json(url, request))
            .await
    }

    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        self.call(Endpoint::Chat, |url| post_json(url, request)).await
    }
}
