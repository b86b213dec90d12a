// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Wakflo.
//!
//! Pure logic: no filesystem, no network, no prompts. Everything that reads
//! or writes goes through the ports in `crate::application`.
//!
//! - **value_objects**: `ResourceKind`, `ResourceSubtype`
//! - **entities**: `ResourceMetadata`, `IntegrationManifest`, `ChangeSet`
//! - **surgery**: anchor insertion, declaration merge, section upsert
//! - **templates**: built-in file templates
//! - **naming**: case conversions and the `Transforms` table
pub mod entities;
pub mod error;
pub mod naming;
pub mod surgery;
pub mod templates;
pub mod value_objects;

mod validation;

pub use entities::{
    ChangeSet, INITIAL_VERSION, IntegrationManifest, RenderContext, ResourceMetadata,
    StagedWrite, parse_authors,
};
pub use error::{DomainError, ErrorCategory};
pub use naming::{Transform, Transforms};
pub use surgery::{
    RegistryAnchor, declaration_identifier, find_section, insert_after_anchor,
    merge_declarations, upsert_section,
};
pub use validation::DomainValidator;
pub use value_objects::{ResourceKind, ResourceSubtype};
