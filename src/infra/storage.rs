//! Image storage on the local filesystem.
//!
//! Files live flat under one root directory and are addressed by their
//! bare filename; callers are responsible for choosing safe names.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};

/// Image storage trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Write `bytes` under `filename`, creating the root directory if needed
    async fn save(&self, filename: &str, bytes: Vec<u8>) -> AppResult<()>;

    /// Remove `filename`; `false` when it did not exist
    async fn delete(&self, filename: &str) -> AppResult<bool>;
}

/// Directory-backed image store
pub struct LocalImageStore {
    root: PathBuf,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, filename: &str, bytes: Vec<u8>) -> AppResult<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| AppError::internal(format!("Failed to create upload dir: {}", e)))?;

        let path = self.root.join(filename);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::internal(format!("Failed to write {}: {}", path.display(), e)))?;

        tracing::debug!(file = %path.display(), "Image stored");
        Ok(())
    }

    async fn delete(&self, filename: &str) -> AppResult<bool> {
        let path = self.root.join(filename);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(AppError::internal(format!(
                "Failed to delete {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path().join("nested"));

        store.save("a.png", vec![1, 2, 3]).await.unwrap();

        let written = tokio::fs::read(dir.path().join("nested/a.png")).await.unwrap();
        assert_eq!(written, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_delete_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalImageStore::new(dir.path());

        store.save("b.gif", vec![0]).await.unwrap();
        assert!(store.delete("b.gif").await.unwrap());
        assert!(!store.delete("b.gif").await.unwrap());
    }
}
