pub mod api_utils;
pub mod export;
pub mod http;
pub mod retry;
pub mod task;
