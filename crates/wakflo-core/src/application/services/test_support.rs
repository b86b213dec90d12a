//! In-memory `Filesystem` used by service tests.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::application::{ApplicationError, ports::Filesystem};
use crate::error::WakfloResult;

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    failing: BTreeSet<PathBuf>,
    failing_removes: BTreeSet<PathBuf>,
    writes: usize,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct FakeFilesystem {
    state: Arc<Mutex<State>>,
}

impl FakeFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file (and its parents) without counting it as a write.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let path = PathBuf::from(path);
            add_parents(&mut state.dirs, &path);
            state.files.insert(path, content.to_string());
        }
        self
    }

    pub fn with_dir(self, path: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let path = PathBuf::from(path);
            add_parents(&mut state.dirs, &path);
            state.dirs.insert(path);
        }
        self
    }

    /// The next write to `path` truncates it, like a half-finished
    /// `std::fs::write`, and then fails. Later writes succeed.
    pub fn fail_writes_to(&self, path: &str) {
        self.state.lock().unwrap().failing.insert(PathBuf::from(path));
    }

    /// Every removal of `path` fails.
    pub fn fail_removes_of(&self, path: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_removes
            .insert(PathBuf::from(path));
    }

    pub fn read(&self, path: &str) -> Option<String> {
        self.state.lock().unwrap().files.get(Path::new(path)).cloned()
    }

    pub fn writes(&self) -> usize {
        self.state.lock().unwrap().writes
    }
}

fn add_parents(dirs: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = path.parent();
    while let Some(dir) = current {
        if dir.as_os_str().is_empty() {
            break;
        }
        dirs.insert(dir.to_path_buf());
        current = dir.parent();
    }
}

fn injected(path: &Path) -> crate::error::WakfloError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "injected failure".into(),
    }
    .into()
}

impl Filesystem for FakeFilesystem {
    fn read_to_string(&self, path: &Path) -> WakfloResult<String> {
        self.state
            .lock()
            .unwrap()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "no such file".into(),
                }
                .into()
            })
    }

    fn write_file(&self, path: &Path, content: &str) -> WakfloResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.failing.remove(path) {
            add_parents(&mut state.dirs, path);
            state.files.insert(path.to_path_buf(), String::new());
            return Err(injected(path));
        }
        state.writes += 1;
        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> WakfloResult<()> {
        let mut state = self.state.lock().unwrap();
        add_parents(&mut state.dirs, path);
        state.dirs.insert(path.to_path_buf());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path) || state.dirs.contains(path)
    }

    fn list_files(&self, dir: &Path, extension: &str) -> WakfloResult<Vec<PathBuf>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .files
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .filter(|p| p.extension().is_some_and(|e| e == extension))
            .cloned()
            .collect())
    }

    fn remove_file(&self, path: &Path) -> WakfloResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.failing_removes.contains(path) {
            return Err(injected(path));
        }
        state.files.remove(path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> WakfloResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.failing_removes.contains(path) {
            return Err(injected(path));
        }
        state.dirs.retain(|d| !d.starts_with(path));
        state.files.retain(|f, _| !f.starts_with(path));
        Ok(())
    }
}
