//! Infrastructure adapters for Wakflo.
//!
//! This crate implements the ports defined in `wakflo-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod auth;
pub mod backend;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use auth::NoopAuthenticator;
pub use backend::{HttpBackend, HttpBackendConfig};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
