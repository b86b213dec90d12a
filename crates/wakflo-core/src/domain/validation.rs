use crate::domain::{
    entities::{ChangeSet, IntegrationManifest},
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across services.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_manifest(manifest: &IntegrationManifest) -> Result<(), DomainError> {
        manifest.validate()
    }

    pub fn validate_change_set(changes: &ChangeSet) -> Result<(), DomainError> {
        changes.validate()
    }
}
