//! Resource Service - adds actions and triggers to an existing integration.
//!
//! The workflow is split so nothing touches the disk until every change is
//! known to succeed:
//! 1. `open_project`: check the markers, read the manifest
//! 2. `plan`: render and patch every affected file in memory
//! 3. `commit`: write the staged files, undoing them on failure

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
    },
    domain::{
        ChangeSet, DomainValidator as validator, IntegrationManifest, ResourceKind,
        ResourceMetadata, StagedWrite, merge_declarations, templates, upsert_section,
    },
    error::{WakfloError, WakfloResult},
};

/// Marker file identifying an integration project.
pub const MARKER_FILE: &str = "flo.toml";
/// Registry file holding the constructor lists.
pub const REGISTRY_FILE: &str = "lib.go";
/// Narrative document listing actions and triggers.
pub const README_FILE: &str = "README.md";
/// Per-kind file embedding the documentation files.
pub const DECLARATIONS_FILE: &str = "doc.go";

/// An opened integration project.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    manifest: IntegrationManifest,
}

impl Project {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest(&self) -> &IntegrationManifest {
        &self.manifest
    }

    /// Prompt sent to the backend when generating a resource description.
    pub fn resource_prompt(&self, kind: ResourceKind, name: &str) -> String {
        format!("{} integration {} called {}", self.manifest.name, kind, name)
    }

    fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }
}

/// Service creating resources inside an integration project.
pub struct ResourceService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ResourceService {
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Check that `root` is an integration project and read its manifest.
    ///
    /// Runs before any prompt so users are not asked questions for nothing.
    #[instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub fn open_project(&self, root: impl AsRef<Path>) -> WakfloResult<Project> {
        let root = root.as_ref().to_path_buf();

        let marker = root.join(MARKER_FILE);
        if !self.filesystem.exists(&marker) {
            return Err(ApplicationError::MissingProjectMarker {
                path: PathBuf::from(MARKER_FILE),
            }
            .into());
        }
        let manifest = IntegrationManifest::from_toml_str(&self.filesystem.read_to_string(&marker)?)?;

        if !self.filesystem.exists(&root.join(REGISTRY_FILE)) {
            return Err(ApplicationError::MissingProjectMarker {
                path: PathBuf::from(REGISTRY_FILE),
            }
            .into());
        }

        debug!(integration = %manifest.name, "Project opened");
        Ok(Project { root, manifest })
    }

    /// Compute every file change needed to add `meta`, without writing.
    #[instrument(skip_all, fields(kind = %meta.kind(), name = %meta.name()))]
    pub fn plan(&self, project: &Project, meta: &ResourceMetadata) -> WakfloResult<ChangeSet> {
        let kind = meta.kind();
        let mut changes = ChangeSet::new();

        for relative in [meta.source_path(), meta.doc_path()] {
            if self.filesystem.exists(&project.path(&relative)) {
                return Err(ApplicationError::ResourceExists { path: relative }.into());
            }
        }

        let context = meta.render_context();
        changes.create(
            meta.source_path(),
            self.renderer.render(kind.source_template(), &context)?,
        );
        changes.create(
            meta.doc_path(),
            self.renderer.render(templates::RESOURCE_DOC, &context)?,
        );

        self.stage_declarations(project, meta, &mut changes)?;

        let registry_path = project.path(REGISTRY_FILE);
        let registry = self.filesystem.read_to_string(&registry_path)?;
        let spliced = kind
            .registry_anchor()
            .splice(&registry, &meta.registry_entry())?;
        changes.update(REGISTRY_FILE, registry, spliced);

        let readme_path = project.path(README_FILE);
        let row = meta.readme_row();
        if self.filesystem.exists(&readme_path) {
            let readme = self.filesystem.read_to_string(&readme_path)?;
            let updated = upsert_section(&readme, kind.readme_heading(), &row, &meta.readme_key());
            changes.update(README_FILE, readme, updated);
        } else {
            let initial = templates::fallback_readme(&project.manifest.name);
            let created = upsert_section(&initial, kind.readme_heading(), &row, &meta.readme_key());
            changes.create(README_FILE, created);
        }

        validator::validate_change_set(&changes)?;
        debug!(files = changes.len(), "Change set planned");
        Ok(changes)
    }

    /// Write a planned change set, all or nothing.
    ///
    /// On the first failure every touched file, including the one that
    /// failed, is put back and the write error is returned. If putting a
    /// file back fails too, the error is `RollbackFailed`.
    #[instrument(skip_all, fields(root = %project.root.display(), files = changes.len()))]
    pub fn commit(&self, project: &Project, changes: &ChangeSet) -> WakfloResult<()> {
        validator::validate_change_set(changes)?;

        let mut touched: Vec<&StagedWrite> = Vec::new();
        let mut created_dirs: Vec<PathBuf> = Vec::new();

        for write in changes.writes() {
            // A failed write may have truncated the file already.
            touched.push(write);
            if let Err(e) = self.apply(project, write, &mut created_dirs) {
                warn!(error = %e, path = %write.path.display(), "Write failed, attempting rollback");
                self.rollback(project, &touched, &created_dirs)
                    .map_err(|rollback| with_cause(rollback, &e))?;
                return Err(e);
            }
        }

        info!("Successfully wrote all files");
        Ok(())
    }

    /// Plan and commit in one step. Returns what was written.
    pub fn create_resource(
        &self,
        project: &Project,
        meta: &ResourceMetadata,
    ) -> WakfloResult<ChangeSet> {
        let changes = self.plan(project, meta)?;
        self.commit(project, &changes)?;
        info!(kind = %meta.kind(), name = %meta.name(), "Resource created");
        Ok(changes)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn stage_declarations(
        &self,
        project: &Project,
        meta: &ResourceMetadata,
        changes: &mut ChangeSet,
    ) -> WakfloResult<()> {
        let folder = meta.kind().folder();
        let folder_path = project.path(folder);
        let relative = Path::new(folder).join(DECLARATIONS_FILE);
        let absolute = project.path(&relative);

        let mut discovered: Vec<String> = if self.filesystem.exists(&folder_path) {
            self.filesystem
                .list_files(&folder_path, "md")?
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect()
        } else {
            Vec::new()
        };
        discovered.push(meta.doc_file_name());
        discovered.sort();
        discovered.dedup();

        let existing = if self.filesystem.exists(&absolute) {
            Some(self.filesystem.read_to_string(&absolute)?)
        } else {
            None
        };

        let merged = merge_declarations(
            existing.as_deref().unwrap_or_default(),
            discovered.iter().map(String::as_str),
            folder,
        );

        match (merged, existing) {
            (Some(content), Some(previous)) => changes.update(relative, previous, content),
            (Some(content), None) => changes.create(relative, content),
            (None, _) => debug!("Declarations already up to date"),
        }
        Ok(())
    }

    fn apply(
        &self,
        project: &Project,
        write: &StagedWrite,
        created_dirs: &mut Vec<PathBuf>,
    ) -> WakfloResult<()> {
        let path = project.path(&write.path);

        if let Some(parent) = path.parent() {
            if !self.filesystem.exists(parent) {
                self.filesystem.create_dir_all(parent)?;
                created_dirs.push(parent.to_path_buf());
            }
        }

        self.filesystem.write_file(&path, &write.content)
    }

    /// Undo `touched` in reverse order, then drop directories created for it.
    ///
    /// Keeps going after a failure so as much as possible is restored; the
    /// first failure is returned.
    fn rollback(
        &self,
        project: &Project,
        touched: &[&StagedWrite],
        created_dirs: &[PathBuf],
    ) -> WakfloResult<()> {
        let mut first_failure: Option<(PathBuf, WakfloError)> = None;

        for write in touched.iter().rev() {
            let path = project.path(&write.path);
            let result = match &write.previous {
                Some(previous) => self.filesystem.write_file(&path, previous),
                None if self.filesystem.exists(&path) => self.filesystem.remove_file(&path),
                None => Ok(()),
            };
            if let Err(e) = result {
                warn!(error = %e, path = %path.display(), "Rollback failed");
                first_failure.get_or_insert((path, e));
            }
        }

        for dir in created_dirs.iter().rev() {
            if let Err(e) = self.filesystem.remove_dir_all(dir) {
                warn!(error = %e, path = %dir.display(), "Rollback failed");
                first_failure.get_or_insert((dir.clone(), e));
            }
        }

        match first_failure {
            None => {
                info!("Rollback successful");
                Ok(())
            }
            Some((path, e)) => Err(ApplicationError::RollbackFailed {
                path,
                reason: e.to_string(),
            }
            .into()),
        }
    }
}

/// Attach the write error that triggered a failed rollback to its reason.
fn with_cause(rollback: WakfloError, cause: &WakfloError) -> WakfloError {
    match rollback {
        WakfloError::Application(ApplicationError::RollbackFailed { path, reason }) => {
            ApplicationError::RollbackFailed {
                path,
                reason: format!("{reason} (after: {cause})"),
            }
            .into()
        }
        other => other,
    }
}
