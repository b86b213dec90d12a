//! Integration Service - creates a new integration folder.

use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
        services::resource_service::{MARKER_FILE, README_FILE, REGISTRY_FILE},
    },
    domain::{ChangeSet, DomainValidator as validator, IntegrationManifest, templates},
    error::WakfloResult,
};

/// Service creating integration projects.
pub struct IntegrationService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl IntegrationService {
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Prompt sent to the backend for an integration's description and docs.
    pub fn prompt(name: &str) -> String {
        format!("{} integration", name.trim())
    }

    /// Folder the integration would be created in.
    pub fn target_folder(parent: &Path, manifest: &IntegrationManifest) -> PathBuf {
        parent.join(manifest.package_name())
    }

    /// Render the three project files without writing them.
    pub fn plan(&self, manifest: &IntegrationManifest, docs: &str) -> WakfloResult<ChangeSet> {
        validator::validate_manifest(manifest)?;

        let context = manifest.render_context(docs);
        let changes = ChangeSet::new()
            .with_created(REGISTRY_FILE, self.renderer.render(templates::LIB_GO, &context)?)
            .with_created(README_FILE, self.renderer.render(templates::README, &context)?)
            .with_created(MARKER_FILE, manifest.to_toml_string()?);

        validator::validate_change_set(&changes)?;
        Ok(changes)
    }

    /// Create `<parent>/<package name>/` with `lib.go`, `README.md` and
    /// `flo.toml`. Returns the folder.
    ///
    /// The folder must not exist. If any write fails the folder is removed.
    #[instrument(skip_all, fields(integration = %manifest.name, parent = %parent.as_ref().display()))]
    pub fn create(
        &self,
        parent: impl AsRef<Path>,
        manifest: &IntegrationManifest,
        docs: &str,
    ) -> WakfloResult<PathBuf> {
        let changes = self.plan(manifest, docs)?;
        let root = Self::target_folder(parent.as_ref(), manifest);

        if self.filesystem.exists(&root) {
            return Err(ApplicationError::ProjectExists { path: root }.into());
        }

        match self.write_all(&root, &changes) {
            Ok(()) => {
                info!(folder = %root.display(), "Integration created");
                Ok(root)
            }
            Err(e) => {
                warn!(error = %e, "Write failed, attempting rollback");
                self.rollback(&root)?;
                Err(e)
            }
        }
    }

    fn write_all(&self, root: &Path, changes: &ChangeSet) -> WakfloResult<()> {
        self.filesystem.create_dir_all(root)?;
        for write in changes.writes() {
            self.filesystem
                .write_file(&root.join(&write.path), &write.content)?;
        }
        Ok(())
    }

    /// Remove the half-written folder.
    fn rollback(&self, root: &Path) -> WakfloResult<()> {
        self.filesystem.remove_dir_all(root).map_err(|e| {
            warn!(error = %e, path = %root.display(), "Rollback failed");
            ApplicationError::RollbackFailed {
                path: root.to_path_buf(),
                reason: e.to_string(),
            }
        })?;
        info!("Rollback successful");
        Ok(())
    }
}
