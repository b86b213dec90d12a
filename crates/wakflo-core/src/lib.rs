//! Wakflo Core - Hexagonal Architecture Implementation
//!
//! Domain and application layers of the Wakflo integration scaffolder.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            wakflo-cli (CLI)             │
//! │   prompts, flags, output, exit codes    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │ (ResourceService, IntegrationService)   │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ Filesystem, Renderer, Backend, Auth     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     wakflo-adapters (Infrastructure)    │
//! └─────────────────────────────────────────┘
//!
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ ResourceMetadata, text surgery, naming  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use wakflo_core::prelude::*;
//!
//! let service = ResourceService::new(renderer, filesystem);
//! let project = service.open_project(".")?;
//! let meta = ResourceMetadata::new(
//!     "Run Python",
//!     "Runs a Python script",
//!     ResourceKind::Action,
//!     ResourceSubtype::Normal,
//! )?;
//! service.create_resource(&project, &meta)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        IntegrationService, Project, ResourceService,
        ports::{Authenticator, BackendClient, Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        ChangeSet, IntegrationManifest, RenderContext, ResourceKind, ResourceMetadata,
        ResourceSubtype, Transforms,
    };
    pub use crate::error::{WakfloError, WakfloResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
