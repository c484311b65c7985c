//! Core client types.

mod api_url;

pub use api_url::{ApiUrl, DEFAULT_BASE_URL};
