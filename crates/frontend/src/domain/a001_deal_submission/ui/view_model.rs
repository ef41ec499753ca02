//! Deal Submission - View Model
//!
//! Holds the session signal and the HTTP client; each action is submitted
//! as a local task that runs the matching workflow function.

use crate::domain::a001_deal_submission::state::{Rejection, ResultTab, SessionState};
use crate::domain::a001_deal_submission::store::StateCell;
use crate::domain::a001_deal_submission::workflow;
use crate::shared::export::{export_filtered_csv, BrowserDownloads};
use crate::shared::http::HttpDealApi;
use crate::shared::task::{submit_task, TaskHandle};
use contracts::domain::a001_deal_submission::UploadFile;
use leptos::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[derive(Clone, Copy)]
pub struct DealSessionVm {
    pub state: RwSignal<SessionState>,
    api: StoredValue<HttpDealApi>,
}

fn log_rejection(action: &str, outcome: Result<bool, Rejection>) {
    if let Err(rejection) = outcome {
        log::debug!("{} not started: {:?}", action, rejection);
    }
}

impl DealSessionVm {
    pub fn new(api: HttpDealApi) -> Self {
        Self {
            state: RwSignal::new(SessionState::new()),
            api: StoredValue::new(api),
        }
    }

    fn api(&self) -> HttpDealApi {
        self.api.get_value()
    }

    pub fn load_companies(&self) -> TaskHandle {
        let vm = *self;
        submit_task(async move {
            workflow::load_companies(&vm.api(), &vm.state).await;
        })
    }

    pub fn submit(&self) -> TaskHandle {
        let vm = *self;
        submit_task(async move {
            log_rejection("submit", workflow::submit(&vm.api(), &vm.state).await);
        })
    }

    pub fn download(&self) -> TaskHandle {
        let vm = *self;
        submit_task(async move {
            let outcome = workflow::download(&vm.api(), &BrowserDownloads, &vm.state).await;
            log_rejection("download", outcome);
        })
    }

    pub fn email_summary(&self) -> TaskHandle {
        let vm = *self;
        let recipient = self.state.with_untracked(|s| s.email_recipient.clone());
        submit_task(async move {
            let outcome = workflow::email_summary(&vm.api(), &vm.state, &recipient).await;
            log_rejection("email", outcome);
        })
    }

    pub fn send_chat(&self) -> TaskHandle {
        let vm = *self;
        let message = self.state.with_untracked(|s| s.chat_input.clone());
        submit_task(async move {
            log_rejection("chat", workflow::send_chat(&vm.api(), &vm.state, &message).await);
        })
    }

    /// Reads the chosen browser file into memory, then hands it to the draft.
    /// A read overtaken by a newer selection (or a reset) is dropped.
    pub fn select_file(&self, file: web_sys::File) -> TaskHandle {
        let vm = *self;
        let ticket = self.state.update_state(SessionState::begin_file_read);
        submit_task(async move {
            let Some(ticket) = ticket else {
                return;
            };
            let outcome = read_upload(&file).await;
            match &outcome {
                Ok(upload) => log::info!("selected '{}' ({} bytes)", upload.name, upload.size()),
                Err(e) => log::error!("failed to read '{}': {}", file.name(), e),
            }
            if !vm
                .state
                .update_state(|s| s.finish_file_read(ticket, outcome))
                .unwrap_or(false)
            {
                log::debug!("dropped stale read of '{}'", file.name());
            }
        })
    }

    pub fn export_filtered(&self) {
        let outcome = self.state.with_untracked(|s| match &s.result {
            Some(result) => export_filtered_csv(&result.output_headers, &s.filtered_rows()),
            None => Err("No data to export".to_string()),
        });
        if let Err(e) = &outcome {
            log::error!("CSV export failed: {}", e);
        }
        self.state.update(|s| s.finish_local_export(outcome));
    }

    pub fn reset(&self) {
        self.state.update(SessionState::reset);
        log::info!("session reset");
    }

    pub fn set_tab(&self, tab: ResultTab) {
        self.state.update(|s| s.set_tab(tab));
    }
}

async fn read_upload(file: &web_sys::File) -> Result<UploadFile, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    let array = js_sys::Uint8Array::new(&buffer);
    let mut bytes = vec![0; array.length() as usize];
    array.copy_to(&mut bytes);
    Ok(UploadFile::new(file.name(), file.type_(), bytes))
}
