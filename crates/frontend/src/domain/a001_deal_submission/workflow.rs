//! Deal Submission - async workflow
//!
//! Each action: take the request out of the state (`begin_*`), await the
//! collaborator without holding any borrow, then hand the outcome back
//! (`finish_*`). Failures end up in the state; nothing propagates further.
//!
//! Return value: `Err(Rejection)` when the action did not start,
//! `Ok(true)` when the outcome was applied, `Ok(false)` when it was
//! discarded (session reset meanwhile, or the store is gone).

use super::api::{DealApi, DownloadSink};
use super::state::{Rejection, SessionState};
use super::store::StateCell;
use contracts::usecases::u501_deal_submission::EXPORT_FILENAME;

pub const EXPORT_MIME: &str = "application/zip";

/// Загрузка списка компаний (идемпотентное чтение)
pub async fn load_companies<A, S>(api: &A, store: &S) -> bool
where
    A: DealApi + ?Sized,
    S: StateCell<SessionState>,
{
    if !store.update_state(SessionState::begin_companies).unwrap_or(false) {
        return false;
    }

    let outcome = api.companies().await;
    match &outcome {
        Ok(body) => log::info!("loaded {} companies", body.companies.len()),
        Err(e) => log::error!("failed to load companies: {}", e),
    }

    store
        .update_state(|s| s.finish_companies(outcome))
        .is_some()
}

pub async fn submit<A, S>(api: &A, store: &S) -> Result<bool, Rejection>
where
    A: DealApi + ?Sized,
    S: StateCell<SessionState>,
{
    let Some(begun) = store.update_state(SessionState::begin_submit) else {
        return Ok(false);
    };
    let (ticket, request) = begun?;

    log::info!(
        "processing '{}' ({} bytes) for {} / {}",
        request.file.name,
        request.file.size(),
        request.company,
        request.deal_name
    );
    let outcome = api.process_file(&request).await;
    match &outcome {
        Ok(result) => log::info!(
            "processed: {} rows, {} columns",
            result.row_count(),
            result.output_headers.len()
        ),
        Err(e) => log::error!("process-file failed: {}", e),
    }

    Ok(store
        .update_state(|s| s.finish_submit(ticket, outcome))
        .unwrap_or(false))
}

/// Выгрузка архива и сохранение под фиксированным именем
pub async fn download<A, D, S>(api: &A, sink: &D, store: &S) -> Result<bool, Rejection>
where
    A: DealApi + ?Sized,
    D: DownloadSink + ?Sized,
    S: StateCell<SessionState>,
{
    let Some(begun) = store.update_state(SessionState::begin_download) else {
        return Ok(false);
    };
    let (ticket, request) = begun?;

    let saved = match api.download_export(&request).await {
        Ok(bytes) => match sink.save(EXPORT_FILENAME, EXPORT_MIME, &bytes) {
            Ok(()) => {
                log::info!("saved {} ({} bytes)", EXPORT_FILENAME, bytes.len());
                true
            }
            Err(e) => {
                log::error!("failed to save {}: {}", EXPORT_FILENAME, e);
                false
            }
        },
        Err(e) => {
            log::error!("download-csv failed: {}", e);
            false
        }
    };

    Ok(store
        .update_state(|s| s.finish_download(ticket, saved))
        .unwrap_or(false))
}

pub async fn email_summary<A, S>(api: &A, store: &S, recipient: &str) -> Result<bool, Rejection>
where
    A: DealApi + ?Sized,
    S: StateCell<SessionState>,
{
    let Some(begun) = store.update_state(|s| s.begin_email(recipient)) else {
        return Ok(false);
    };
    let (ticket, request) = begun?;

    let outcome = api.email_summary(&request).await;
    match &outcome {
        Ok(body) => log::info!("email-summary: {}", body.message),
        Err(e) => log::error!("email-summary failed: {}", e),
    }

    Ok(store
        .update_state(|s| s.finish_email(ticket, outcome))
        .unwrap_or(false))
}

pub async fn send_chat<A, S>(api: &A, store: &S, message: &str) -> Result<bool, Rejection>
where
    A: DealApi + ?Sized,
    S: StateCell<SessionState>,
{
    let Some(begun) = store.update_state(|s| s.begin_chat(message)) else {
        return Ok(false);
    };
    let (ticket, request) = begun?;

    log::debug!("chat: {} rows of context", request.data_context.len());
    let outcome = api.chat(&request).await;
    if let Err(e) = &outcome {
        log::error!("chat failed: {}", e);
    }

    Ok(store
        .update_state(|s| s.finish_chat(ticket, outcome))
        .unwrap_or(false))
}
