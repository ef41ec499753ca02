//! Backend health probe.
//!
//! One request per activation. Each `begin` takes a new generation and
//! `deactivate` (unmount) bumps it, so a reply that arrives for an older
//! generation is dropped instead of overwriting newer state.

use super::api::DealApi;
use super::store::StateCell;
use contracts::shared::ApiError;
use contracts::usecases::u501_deal_submission::HealthResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthStatus {
    #[default]
    Idle,
    Loading,
    Ok,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthProbe {
    pub status: HealthStatus,
    pub message: String,
    generation: u64,
}

impl HealthProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> ProbeTicket {
        self.generation = self.generation.wrapping_add(1);
        self.status = HealthStatus::Loading;
        self.message = "Checking backend...".to_string();
        ProbeTicket(self.generation)
    }

    /// Применяет ответ, только если проба всё ещё актуальна
    pub fn complete(&mut self, ticket: ProbeTicket, outcome: Result<HealthResponse, ApiError>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match outcome {
            Ok(body) => {
                self.status = HealthStatus::Ok;
                self.message = format!("Backend status: {}", body.status);
            }
            Err(e) => {
                self.status = HealthStatus::Error;
                self.message = match e.status() {
                    Some(code) => format!("Backend error: HTTP {}", code),
                    None => format!("Backend error: {}", e),
                };
            }
        }
        true
    }

    pub fn deactivate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

/// Runs one probe. Returns `true` if the reply was applied.
pub async fn run_probe<A, S>(api: &A, store: &S) -> bool
where
    A: DealApi + ?Sized,
    S: StateCell<HealthProbe>,
{
    let Some(ticket) = store.update_state(HealthProbe::begin) else {
        return false;
    };

    let outcome = api.health().await;
    match &outcome {
        Ok(body) => log::debug!("health probe: {}", body.status),
        Err(e) => log::warn!("health probe failed: {}", e),
    }

    store
        .update_state(|probe| probe.complete(ticket, outcome))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_deal_submission::fake::FakeDealApi;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_probe_ok_uses_status_string() {
        let api = FakeDealApi::new();
        api.health_replies(vec![Ok(HealthResponse { status: "ok".into() })]);
        let store = Rc::new(RefCell::new(HealthProbe::new()));

        assert!(block_on(run_probe(&api, &store)));
        let probe = store.borrow();
        assert_eq!(probe.status, HealthStatus::Ok);
        assert_eq!(probe.message, "Backend status: ok");
        assert_eq!(api.calls().health, 1);
    }

    #[test]
    fn test_probe_error_mentions_status_code() {
        let api = FakeDealApi::new();
        api.health_replies(vec![Err(ApiError::Status { status: 503 })]);
        let store = Rc::new(RefCell::new(HealthProbe::new()));

        block_on(run_probe(&api, &store));
        let probe = store.borrow();
        assert_eq!(probe.status, HealthStatus::Error);
        assert!(probe.message.contains("503"), "{}", probe.message);
    }

    #[test]
    fn test_network_error_message() {
        let mut probe = HealthProbe::new();
        let ticket = probe.begin();
        probe.complete(ticket, Err(ApiError::Network("connection refused".into())));
        assert_eq!(probe.message, "Backend error: Network error: connection refused");
    }

    #[test]
    fn test_late_reply_after_deactivate_is_ignored() {
        let mut probe = HealthProbe::new();
        let ticket = probe.begin();
        assert_eq!(probe.status, HealthStatus::Loading);
        probe.deactivate();
        assert!(!probe.complete(ticket, Ok(HealthResponse { status: "ok".into() })));
        assert_eq!(probe.status, HealthStatus::Loading);
    }

    #[test]
    fn test_only_latest_probe_writes() {
        let mut probe = HealthProbe::new();
        let first = probe.begin();
        let second = probe.begin();
        assert!(!probe.complete(first, Err(ApiError::Status { status: 500 })));
        assert!(probe.complete(second, Ok(HealthResponse { status: "ok".into() })));
        assert_eq!(probe.status, HealthStatus::Ok);
    }
}
