//! File-based session identifier store
//!
//! Persists the single per-install identifier to a local file in the
//! application data directory.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use rf_core::ports::{SessionStoreError, SessionStorePort};
use rf_core::session::SessionId;

pub const DEFAULT_SESSION_ID_FILE: &str = ".session_id";

pub struct FileSessionStore {
    id_file_path: PathBuf,
}

impl FileSessionStore {
    /// Create store with custom file path
    pub fn new(id_file_path: PathBuf) -> Self {
        Self { id_file_path }
    }

    /// Create store with base dir and filename
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self {
            id_file_path: base_dir.join(filename.into()),
        }
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self {
            id_file_path: base_dir.join(DEFAULT_SESSION_ID_FILE),
        }
    }

    async fn ensure_parent_dir(&self) -> Result<(), SessionStoreError> {
        if let Some(parent) = self.id_file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SessionStoreError::Storage(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl SessionStorePort for FileSessionStore {
    async fn load(&self) -> Result<Option<SessionId>, SessionStoreError> {
        if !self.id_file_path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.id_file_path)
            .await
            .map_err(|e| SessionStoreError::Storage(e.to_string()))?;

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        // The identifier is opaque; anything with interior whitespace was
        // not written by us.
        if trimmed.contains(char::is_whitespace) {
            return Err(SessionStoreError::Corrupt(format!(
                "unexpected whitespace in {:?}",
                self.id_file_path
            )));
        }

        Ok(Some(SessionId::from(trimmed)))
    }

    async fn store(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.ensure_parent_dir().await?;

        let mut file = fs::File::create(&self.id_file_path)
            .await
            .map_err(|e| SessionStoreError::Storage(e.to_string()))?;

        file.write_all(id.as_str().as_bytes())
            .await
            .map_err(|e| SessionStoreError::Storage(e.to_string()))?;

        file.sync_all()
            .await
            .map_err(|e| SessionStoreError::Storage(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_returns_none_when_file_not_exists() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("nonexistent"));

        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join(DEFAULT_SESSION_ID_FILE));

        let id = SessionId::generate();
        store.store(&id).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(id));
    }

    #[tokio::test]
    async fn test_fresh_store_instance_sees_the_persisted_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_SESSION_ID_FILE);

        let id = SessionId::generate();
        FileSessionStore::new(path.clone()).store(&id).await.unwrap();

        // A brand-new instance over the same storage returns the same value.
        let reopened = FileSessionStore::new(path);
        assert_eq!(reopened.load().await.unwrap(), Some(id));
    }

    #[tokio::test]
    async fn test_store_overwrites_existing_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_defaults(temp_dir.path().to_path_buf());

        let first = SessionId::generate();
        let second = SessionId::generate();
        store.store(&first).await.unwrap();
        store.store(&second).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_empty_file_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty");
        fs::write(&path, "").await.unwrap();

        let store = FileSessionStore::new(path);
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_surrounding_whitespace_is_trimmed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_SESSION_ID_FILE);
        fs::write(&path, "abc-123\n").await.unwrap();

        let store = FileSessionStore::new(path);
        assert_eq!(store.load().await.unwrap(), Some(SessionId::from("abc-123")));
    }

    #[tokio::test]
    async fn test_interior_whitespace_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_SESSION_ID_FILE);
        fs::write(&path, "abc 123").await.unwrap();

        let store = FileSessionStore::new(path);
        let result = store.load().await;
        assert!(matches!(result, Err(SessionStoreError::Corrupt(_))));
    }

    #[tokio::test]
    async fn test_with_defaults_uses_fixed_filename() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::with_defaults(temp_dir.path().to_path_buf());

        let expected_path = temp_dir.path().join(DEFAULT_SESSION_ID_FILE);
        assert_eq!(store.id_file_path, expected_path);
    }

    #[tokio::test]
    async fn test_with_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let store =
            FileSessionStore::with_base_dir(temp_dir.path().to_path_buf(), "custom_session");

        let expected_path = temp_dir.path().join("custom_session");
        assert_eq!(store.id_file_path, expected_path);
    }

    #[tokio::test]
    async fn test_store_creates_missing_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("nested").join("dir").join("id"));

        let id = SessionId::generate();
        store.store(&id).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(id));
    }
}
