//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use wakflo_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{WakfloError, WakfloResult},
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep one handle and give another to a
/// service.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        if let Ok(mut inner) = self.inner.write() {
            if let Some(parent) = path.parent() {
                insert_ancestors(&mut inner.directories, parent);
            }
            inner.files.insert(path, content.into());
        }
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All file paths, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn read_guard(&self) -> WakfloResult<RwLockReadGuard<'_, MemoryFilesystemInner>> {
        self.inner.read().map_err(|_| poisoned())
    }

    fn write_guard(&self) -> WakfloResult<RwLockWriteGuard<'_, MemoryFilesystemInner>> {
        self.inner.write().map_err(|_| poisoned())
    }
}

fn poisoned() -> WakfloError {
    WakfloError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

fn insert_ancestors(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

fn not_found(path: &Path) -> WakfloError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "No such file".into(),
    }
    .into()
}

impl Filesystem for MemoryFilesystem {
    fn read_to_string(&self, path: &Path) -> WakfloResult<String> {
        self.read_guard()?
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found(path))
    }

    fn write_file(&self, path: &Path, content: &str) -> WakfloResult<()> {
        let mut inner = self.write_guard()?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> WakfloResult<()> {
        let mut inner = self.write_guard()?;
        insert_ancestors(&mut inner.directories, path);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
            .unwrap_or(false)
    }

    fn list_files(&self, dir: &Path, extension: &str) -> WakfloResult<Vec<PathBuf>> {
        let inner = self.read_guard()?;
        Ok(inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter(|p| p.extension().is_some_and(|e| e == extension))
            .cloned()
            .collect())
    }

    fn remove_file(&self, path: &Path) -> WakfloResult<()> {
        let mut inner = self.write_guard()?;
        inner
            .files
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| not_found(path))
    }

    fn remove_dir_all(&self, path: &Path) -> WakfloResult<()> {
        let mut inner = self.write_guard()?;
        inner.directories.retain(|d| !d.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        Ok(())
    }
}
