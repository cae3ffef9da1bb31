//! Image service - Validates, names and stores uploaded product images.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{image_extension, MAX_UPLOAD_BYTES, UPLOAD_FILENAME_PATTERN, UPLOAD_URL_PREFIX};
use crate::errors::{AppError, AppResult};
use crate::infra::ImageStore;

static FILENAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(UPLOAD_FILENAME_PATTERN).expect("upload filename pattern is a valid regex")
});

/// A stored upload and the path it is served under
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub url: String,
    pub filename: String,
}

/// True for bare filenames that cannot escape the upload directory.
pub fn is_safe_filename(name: &str) -> bool {
    FILENAME_RE.is_match(name)
}

/// Image service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Store an image under a fresh `<uuid>.<ext>` name
    async fn upload(&self, content_type: Option<String>, bytes: Vec<u8>) -> AppResult<StoredImage>;

    /// Delete a stored image by filename or `/uploads/<file>` path
    async fn delete(&self, filename: &str) -> AppResult<()>;
}

/// Concrete implementation of ImageService.
pub struct ImageManager {
    store: Arc<dyn ImageStore>,
}

impl ImageManager {
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ImageService for ImageManager {
    async fn upload(&self, content_type: Option<String>, bytes: Vec<u8>) -> AppResult<StoredImage> {
        let extension = content_type
            .as_deref()
            .and_then(image_extension)
            .ok_or_else(|| {
                AppError::validation("Invalid file type. Only JPEG, PNG, WebP, and GIF are allowed")
            })?;

        if bytes.is_empty() {
            return Err(AppError::validation("No file provided"));
        }
        if bytes.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::validation("File too large. Maximum size is 5MB"));
        }

        let filename = format!("{}.{}", Uuid::new_v4(), extension);
        let size = bytes.len();
        self.store.save(&filename, bytes).await?;

        tracing::info!(file = %filename, size, "Image uploaded");
        Ok(StoredImage {
            url: format!("{}/{}", UPLOAD_URL_PREFIX, filename),
            filename,
        })
    }

    async fn delete(&self, filename: &str) -> AppResult<()> {
        let name = filename
            .strip_prefix(UPLOAD_URL_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(filename);

        if !is_safe_filename(name) {
            return Err(AppError::bad_request("Invalid filename"));
        }

        if !self.store.delete(name).await? {
            return Err(AppError::not_found("File"));
        }

        tracing::info!(file = %name, "Image deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockImageStore;

    fn manager(store: MockImageStore) -> ImageManager {
        ImageManager::new(Arc::new(store))
    }

    #[test]
    fn test_safe_filenames() {
        assert!(is_safe_filename("3f2c9a1e-8d1b-4a43-9a43-0c6d1f0a2b7e.png"));
        assert!(is_safe_filename("logo_v2.webp"));
        assert!(!is_safe_filename(""));
        assert!(!is_safe_filename(".env"));
        assert!(!is_safe_filename("../secret.png"));
        assert!(!is_safe_filename("a/b.png"));
        assert!(!is_safe_filename("a\\b.png"));
        assert!(!is_safe_filename(&"a".repeat(256)));
    }

    #[tokio::test]
    async fn test_upload_stores_with_uuid_name() {
        let mut store = MockImageStore::new();
        store
            .expect_save()
            .withf(|name: &str, bytes: &Vec<u8>| name.ends_with(".jpg") && bytes.len() == 3)
            .times(1)
            .returning(|_, _| Ok(()));

        let stored = manager(store)
            .upload(Some("image/jpg".to_string()), vec![1, 2, 3])
            .await
            .unwrap();

        assert!(stored.filename.ends_with(".jpg"));
        assert_eq!(stored.filename.len(), 36 + 4);
        assert_eq!(stored.url, format!("/uploads/{}", stored.filename));
    }

    #[tokio::test]
    async fn test_upload_rejects_unsupported_type() {
        let mut store = MockImageStore::new();
        store.expect_save().never();

        let result = manager(store)
            .upload(Some("application/pdf".to_string()), vec![1])
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_upload_rejects_oversized_file() {
        let mut store = MockImageStore::new();
        store.expect_save().never();

        let result = manager(store)
            .upload(Some("image/png".to_string()), vec![0; MAX_UPLOAD_BYTES + 1])
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_accepts_served_path() {
        let mut store = MockImageStore::new();
        store
            .expect_delete()
            .withf(|name: &str| name == "a.png")
            .returning(|_| Ok(true));

        manager(store).delete("/uploads/a.png").await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_unsafe_name() {
        let mut store = MockImageStore::new();
        store.expect_delete().never();

        let result = manager(store).delete("../Cargo.toml").await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_file() {
        let mut store = MockImageStore::new();
        store.expect_delete().returning(|_| Ok(false));

        let result = manager(store).delete("gone.png").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
