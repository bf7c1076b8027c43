//! Real file system implementation.

use std::path::Path;

use placeholders_application::ports::{FileSystem, FileSystemError};
use tokio::fs;

/// Real file system implementation using `tokio::fs`.
#[derive(Debug, Clone, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates a new `TokioFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for TokioFileSystem {
    async fn read_file_string(&self, path: &Path) -> Result<String, FileSystemError> {
        fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FileSystemError::NotFound(path.to_path_buf())
            } else if e.kind() == std::io::ErrorKind::PermissionDenied {
                FileSystemError::PermissionDenied(path.to_path_buf())
            } else {
                FileSystemError::Io(e)
            }
        })
    }

    async fn is_file(&self, path: &Path) -> bool {
        fs::metadata(path).await.is_ok_and(|m| m.is_file())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("login.yml");
        std::fs::write(&path, "smoke: {}\n").unwrap();

        let fs = TokioFileSystem::new();
        assert!(fs.is_file(&path).await);
        assert_eq!(fs.read_file_string(&path).await.unwrap(), "smoke: {}\n");
    }

    #[tokio::test]
    async fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.yml");

        let fs = TokioFileSystem::new();
        assert!(!fs.is_file(&path).await);
        assert!(matches!(
            fs.read_file_string(&path).await,
            Err(FileSystemError::NotFound(p)) if p == path
        ));
    }
}
