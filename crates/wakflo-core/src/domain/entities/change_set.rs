use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// File writes staged in memory, committed together.
///
/// Each write remembers what the file held before (`None` when the file is
/// new), so a failed commit can put the project back the way it was. Paths
/// are relative to the project root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    writes: Vec<StagedWrite>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedWrite {
    pub path: PathBuf,
    pub content: String,
    pub previous: Option<String>,
}

impl StagedWrite {
    pub fn is_new(&self) -> bool {
        self.previous.is_none()
    }
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a file that does not exist yet.
    pub fn create(&mut self, path: impl Into<PathBuf>, content: String) {
        self.writes.push(StagedWrite {
            path: path.into(),
            content,
            previous: None,
        });
    }

    /// Stage new content for an existing file. Unchanged content is not staged.
    pub fn update(&mut self, path: impl Into<PathBuf>, previous: String, content: String) {
        if previous == content {
            return;
        }
        self.writes.push(StagedWrite {
            path: path.into(),
            content,
            previous: Some(previous),
        });
    }

    pub fn with_created(mut self, path: impl Into<PathBuf>, content: String) -> Self {
        self.create(path, content);
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for write in &self.writes {
            let path_str = write.path.display().to_string();
            if write.path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed { path: path_str });
            }
            if !seen.insert(write.path.as_path()) {
                return Err(DomainError::DuplicatePath { path: path_str });
            }
        }
        Ok(())
    }

    pub fn writes(&self) -> impl Iterator<Item = &StagedWrite> {
        self.writes.iter()
    }

    pub fn get(&self, path: &Path) -> Option<&StagedWrite> {
        self.writes.iter().find(|w| w.path == path)
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }
}
