//! Application layer for Wakflo.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ResourceService, IntegrationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{IntegrationService, Project, ResourceService};

pub use ports::{Authenticator, BackendClient, Filesystem, TemplateRenderer};

pub use error::ApplicationError;
