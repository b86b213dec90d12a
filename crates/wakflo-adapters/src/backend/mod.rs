//! Remote backend adapters.

mod http;

pub use http::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpBackend, HttpBackendConfig, trim_quotes};
