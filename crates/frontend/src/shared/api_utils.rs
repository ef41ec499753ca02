//! API configuration for frontend-backend communication
//!
//! The backend address is resolved once at start-up:
//! `?api_base=` query parameter, then `localStorage["rehub.api_base"]`,
//! then the build-time `REHUB_BACKEND_URL`, then the default.

use contracts::shared::ApiConfig;
use serde::Deserialize;
use web_sys::window;

/// Ключ localStorage с адресом бэкенда
pub const API_BASE_STORAGE_KEY: &str = "rehub.api_base";

#[derive(Debug, Default, Deserialize)]
struct ConfigQuery {
    api_base: Option<String>,
}

/// Extracts a non-blank `api_base` from a location search string
/// (with or without the leading `?`).
pub fn override_from_query(search: &str) -> Option<String> {
    let query: ConfigQuery = serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    query.api_base.filter(|v| !v.trim().is_empty())
}

fn query_override() -> Option<String> {
    let search = window().and_then(|w| w.location().search().ok())?;
    override_from_query(&search)
}

fn stored_override() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_BASE_STORAGE_KEY).ok().flatten())
        .filter(|v| !v.trim().is_empty())
}

pub fn resolve_api_config() -> ApiConfig {
    let explicit = query_override().or_else(stored_override);
    let config = ApiConfig::resolve(explicit.as_deref(), option_env!("REHUB_BACKEND_URL"));
    log::info!(
        "backend base URL: {} (source: {:?})",
        config.base_url(),
        config.source()
    );
    config
}
