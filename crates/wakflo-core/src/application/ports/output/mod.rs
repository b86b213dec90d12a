//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `wakflo-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::RenderContext;
use crate::error::WakfloResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `wakflo_adapters::filesystem::LocalFilesystem` (production)
/// - `wakflo_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> WakfloResult<String>;

    /// Write content to a file, replacing what was there.
    fn write_file(&self, path: &Path, content: &str) -> WakfloResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> WakfloResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Files directly inside `dir` with the given extension, sorted by name.
    /// A missing directory yields an empty list.
    fn list_files(&self, dir: &Path, extension: &str) -> WakfloResult<Vec<PathBuf>>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> WakfloResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> WakfloResult<()>;
}

/// Port for template rendering.
///
/// Implemented by `wakflo_adapters::renderer::SimpleRenderer`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render one template string against the context.
    fn render(&self, template: &str, context: &RenderContext) -> WakfloResult<String>;
}

/// Port for the remote backend that generates text and lists catalog data.
///
/// Implemented by `wakflo_adapters::backend::HttpBackend`.
#[cfg_attr(test, mockall::automock)]
pub trait BackendClient: Send + Sync {
    /// One-line description for a resource or integration.
    fn generate_description(&self, prompt: &str, kind: &str) -> WakfloResult<String>;

    /// Markdown documentation body.
    fn generate_documentation(&self, prompt: &str, kind: &str) -> WakfloResult<String>;

    /// Icon identifiers matching a name. May be empty.
    fn search_icons(&self, name: &str) -> WakfloResult<Vec<String>>;

    /// Category keys an integration can be filed under.
    fn list_categories(&self) -> WakfloResult<Vec<String>>;
}

/// Port for the authentication capability.
///
/// Implemented by `wakflo_adapters::auth::NoopAuthenticator`.
#[cfg_attr(test, mockall::automock)]
pub trait Authenticator: Send + Sync {
    fn login(&self) -> WakfloResult<()>;

    fn logout(&self) -> WakfloResult<()>;

    fn is_authenticated(&self) -> bool;

    fn current_token(&self) -> Option<String>;
}
