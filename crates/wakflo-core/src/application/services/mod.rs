//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "add an action" or "create an integration".

pub mod integration_service;
pub mod resource_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use integration_service::IntegrationService;
pub use resource_service::{
    DECLARATIONS_FILE, MARKER_FILE, Project, README_FILE, REGISTRY_FILE, ResourceService,
};
