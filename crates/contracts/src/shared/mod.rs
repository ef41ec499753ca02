pub mod api_config;
pub mod api_error;

pub use api_config::{ApiConfig, CallPolicy, ConfigSource, Endpoint, DEFAULT_API_BASE};
pub use api_error::ApiError;
