//! Configuration of the backend collaborator: base URL, endpoints and the
//! per-endpoint timeout/retry policy.

use super::api_error::ApiError;
use std::collections::HashMap;

/// Адрес бэкенда по умолчанию
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Эндпоинты бэкенда
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Health,
    Companies,
    ProcessFile,
    DownloadExport,
    EmailSummary,
    Chat,
}

impl Endpoint {
    pub const fn path(self) -> &'static str {
        match self {
            Endpoint::Health => "/health",
            Endpoint::Companies => "/api/companies",
            Endpoint::ProcessFile => "/api/process-file",
            Endpoint::DownloadExport => "/api/download-csv",
            Endpoint::EmailSummary => "/api/email-summary",
            Endpoint::Chat => "/api/chat",
        }
    }

    /// Только чтения можно безопасно повторять
    pub const fn is_idempotent(self) -> bool {
        matches!(self, Endpoint::Health | Endpoint::Companies)
    }

    fn default_policy(self) -> CallPolicy {
        match self {
            Endpoint::Health => CallPolicy::retrying(10_000, 3, 500),
            Endpoint::Companies => CallPolicy::retrying(15_000, 3, 500),
            Endpoint::ProcessFile => CallPolicy::single(180_000),
            Endpoint::DownloadExport => CallPolicy::single(60_000),
            Endpoint::EmailSummary => CallPolicy::single(30_000),
            Endpoint::Chat => CallPolicy::single(90_000),
        }
    }
}

/// Таймаут и повторы для одного эндпоинта
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallPolicy {
    pub timeout_ms: u32,
    pub max_attempts: u32,
    pub backoff_ms: u32,
}

impl CallPolicy {
    pub const fn single(timeout_ms: u32) -> Self {
        Self {
            timeout_ms,
            max_attempts: 1,
            backoff_ms: 0,
        }
    }

    pub const fn retrying(timeout_ms: u32, max_attempts: u32, backoff_ms: u32) -> Self {
        Self {
            timeout_ms,
            max_attempts,
            backoff_ms,
        }
    }

    /// Pause before the given 1-based attempt: nothing before the first one,
    /// then `backoff_ms` doubling on every further attempt.
    pub fn delay_before(&self, attempt: u32) -> u32 {
        if attempt <= 1 {
            return 0;
        }
        let doublings = (attempt - 2).min(16);
        self.backoff_ms.saturating_mul(1 << doublings)
    }

    /// Нужен ли ещё один заход после неудачной попытки `attempt`
    pub fn should_retry(&self, attempt: u32, error: &ApiError) -> bool {
        attempt < self.max_attempts && error.is_retryable()
    }
}

/// Откуда взят адрес бэкенда
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Override,
    Environment,
    Default,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    source: ConfigSource,
    overrides: HashMap<Endpoint, CallPolicy>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}

impl ApiConfig {
    /// Precedence: explicit override, then environment, then
    /// [`DEFAULT_API_BASE`]. Blank candidates are skipped.
    pub fn resolve(explicit: Option<&str>, environment: Option<&str>) -> Self {
        let pick = |value: Option<&str>| {
            value
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
        };

        let (base_url, source) = if let Some(url) = pick(explicit) {
            (url, ConfigSource::Override)
        } else if let Some(url) = pick(environment) {
            (url, ConfigSource::Environment)
        } else {
            (DEFAULT_API_BASE.to_string(), ConfigSource::Default)
        };

        Self {
            base_url,
            source,
            overrides: HashMap::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn source(&self) -> ConfigSource {
        self.source
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Replaces the policy of one endpoint. Non-idempotent endpoints are
    /// always capped at a single attempt.
    pub fn with_policy(mut self, endpoint: Endpoint, policy: CallPolicy) -> Self {
        self.overrides.insert(endpoint, policy);
        self
    }

    pub fn policy(&self, endpoint: Endpoint) -> CallPolicy {
        let mut policy = self
            .overrides
            .get(&endpoint)
            .copied()
            .unwrap_or_else(|| endpoint.default_policy());
        if !endpoint.is_idempotent() {
            policy.max_attempts = 1;
        }
        policy.max_attempts = policy.max_attempts.max(1);
        policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_precedence() {
        let cfg = ApiConfig::resolve(Some("https://override.example/"), Some("https://env.example"));
        assert_eq!(cfg.base_url(), "https://override.example");
        assert_eq!(cfg.source(), ConfigSource::Override);

        let cfg = ApiConfig::resolve(Some("   "), Some("https://env.example"));
        assert_eq!(cfg.base_url(), "https://env.example");
        assert_eq!(cfg.source(), ConfigSource::Environment);

        let cfg = ApiConfig::resolve(None, Some(""));
        assert_eq!(cfg.base_url(), DEFAULT_API_BASE);
        assert_eq!(cfg.source(), ConfigSource::Default);
    }

    #[test]
    fn test_urls() {
        let cfg = ApiConfig::resolve(Some("https://rehub.example"), None);
        assert_eq!(cfg.url(Endpoint::Health), "https://rehub.example/health");
        assert_eq!(
            cfg.url(Endpoint::ProcessFile),
            "https://rehub.example/api/process-file"
        );
        assert_eq!(
            cfg.url(Endpoint::DownloadExport),
            "https://rehub.example/api/download-csv"
        );
    }

    #[test]
    fn test_mutating_calls_never_retry() {
        let cfg = ApiConfig::default()
            .with_policy(Endpoint::EmailSummary, CallPolicy::retrying(1_000, 5, 10));
        assert_eq!(cfg.policy(Endpoint::EmailSummary).max_attempts, 1);
        assert_eq!(cfg.policy(Endpoint::Chat).max_attempts, 1);
        assert_eq!(cfg.policy(Endpoint::ProcessFile).max_attempts, 1);
        assert_eq!(cfg.policy(Endpoint::Health).max_attempts, 3);
        assert_eq!(cfg.policy(Endpoint::Companies).max_attempts, 3);
    }

    #[test]
    fn test_backoff_doubles() {
        let policy = CallPolicy::retrying(1_000, 4, 500);
        assert_eq!(policy.delay_before(1), 0);
        assert_eq!(policy.delay_before(2), 500);
        assert_eq!(policy.delay_before(3), 1_000);
        assert_eq!(policy.delay_before(4), 2_000);
    }

    #[test]
    fn test_should_retry() {
        let policy = CallPolicy::retrying(1_000, 2, 0);
        let offline = ApiError::Network("offline".into());
        assert!(policy.should_retry(1, &offline));
        assert!(!policy.should_retry(2, &offline));
        assert!(!policy.should_retry(1, &ApiError::Status { status: 404 }));
    }
}
