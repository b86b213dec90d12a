//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wakflo_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{WakfloError, WakfloResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> WakfloResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> WakfloResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_dir_all(&self, path: &Path) -> WakfloResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list_files(&self, dir: &Path, extension: &str) -> WakfloResult<Vec<PathBuf>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                WakfloError::from(ApplicationError::FilesystemError {
                    path,
                    reason: format!("Failed to list directory: {e}"),
                })
            })?;

            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|e| e == extension)
            {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn remove_file(&self, path: &Path) -> WakfloResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn remove_dir_all(&self, path: &Path) -> WakfloResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> WakfloError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_then_read() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let path = tmp.path().join("a/b/c.txt");

        fs.create_dir_all(path.parent().unwrap()).unwrap();
        fs.write_file(&path, "hello").unwrap();

        assert!(fs.exists(&path));
        assert_eq!(fs.read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn list_files_filters_by_extension_and_depth() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let root = tmp.path();
        std::fs::write(root.join("b.md"), "").unwrap();
        std::fs::write(root.join("a.md"), "").unwrap();
        std::fs::write(root.join("a.go"), "").unwrap();
        std::fs::create_dir(root.join("nested")).unwrap();
        std::fs::write(root.join("nested/c.md"), "").unwrap();

        let names: Vec<_> = fs
            .list_files(root, "md")
            .unwrap()
            .into_iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn list_files_of_missing_dir_is_empty() {
        let tmp = TempDir::new().unwrap();
        let files = LocalFilesystem::new()
            .list_files(&tmp.path().join("nope"), "md")
            .unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn reading_a_missing_file_is_a_filesystem_error() {
        let tmp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .read_to_string(&tmp.path().join("missing.txt"))
            .unwrap_err();
        assert!(matches!(
            err,
            WakfloError::Application(ApplicationError::FilesystemError { .. })
        ));
    }

    #[test]
    fn remove_file_and_dir() {
        let tmp = TempDir::new().unwrap();
        let fs = LocalFilesystem::new();
        let dir = tmp.path().join("actions");
        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&dir.join("x.go"), "x").unwrap();

        fs.remove_file(&dir.join("x.go")).unwrap();
        assert!(!fs.exists(&dir.join("x.go")));
        fs.remove_dir_all(&dir).unwrap();
        assert!(!fs.exists(&dir));
    }
}
