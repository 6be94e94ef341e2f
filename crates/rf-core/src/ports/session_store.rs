use async_trait::async_trait;
use thiserror::Error;

use crate::session::SessionId;

#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("session store failed: {0}")]
    Storage(String),

    #[error("session data corrupt: {0}")]
    Corrupt(String),
}

/// Durable storage for the per-install session identifier.
#[async_trait]
pub trait SessionStorePort: Send + Sync {
    /// Load the stored identifier, if any.
    async fn load(&self) -> Result<Option<SessionId>, SessionStoreError>;

    /// Store the identifier. Must be idempotent (overwrite if exists).
    async fn store(&self, id: &SessionId) -> Result<(), SessionStoreError>;
}

#[cfg(test)]
mockall::mock! {
    pub SessionStore {}

    #[async_trait]
    impl SessionStorePort for SessionStore {
        async fn load(&self) -> Result<Option<SessionId>, SessionStoreError>;
        async fn store(&self, id: &SessionId) -> Result<(), SessionStoreError>;
    }
}
