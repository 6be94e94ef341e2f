//! Session lifecycle management.

use std::sync::Arc;

use log::warn;
use tokio::sync::RwLock;

use rf_core::ports::SessionStorePort;
use rf_core::session::{SessionId, SessionState};

/// Result of the cold-start storage read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSession {
    pub id: Option<SessionId>,

    /// Whether the identifier was actually found in durable storage.
    /// In-memory fallback identifiers (degraded mode) are not persisted and
    /// must not count as a returning user.
    pub persisted: bool,
}

/// Owner of the per-install session identifier.
///
/// The only writer of the identifier; every other component reads it
/// through this manager.
pub struct SessionManager {
    store: Arc<dyn SessionStorePort>,
    state: RwLock<SessionState>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn SessionStorePort>) -> Self {
        Self {
            store,
            state: RwLock::new(SessionState::Unresolved),
        }
    }

    /// The one cold-start read of durable storage.
    ///
    /// A read failure is degraded, not fatal: the process gets a fresh
    /// identifier that lives only in memory and will not survive restart.
    pub async fn resolve(&self) -> ResolvedSession {
        let resolved = match self.store.load().await {
            Ok(stored) => ResolvedSession {
                persisted: stored.is_some(),
                id: stored,
            },
            Err(err) => {
                warn!("failed to load session id, falling back to in-memory id: {err}");
                ResolvedSession {
                    id: Some(SessionId::generate()),
                    persisted: false,
                }
            }
        };
        *self.state.write().await = SessionState::Resolved(resolved.id.clone());
        resolved
    }

    /// Current identifier, generating and persisting a new one if absent.
    ///
    /// Idempotent: repeated calls return the identical identifier, and at
    /// most one durable write happens per install. A write failure keeps
    /// the generated identifier for this process only.
    pub async fn get_or_create(&self) -> SessionId {
        let mut state = self.state.write().await;

        // First need can arrive before the start-up resolution ran.
        if let SessionState::Unresolved = &*state {
            match self.store.load().await {
                Ok(Some(id)) => {
                    *state = SessionState::Resolved(Some(id.clone()));
                    return id;
                }
                Ok(None) => {}
                Err(err) => {
                    warn!("failed to load session id: {err}");
                }
            }
        }

        if let SessionState::Resolved(Some(id)) = &*state {
            return id.clone();
        }

        let id = SessionId::generate();
        if let Err(err) = self.store.store(&id).await {
            warn!("failed to persist session id, keeping it in memory: {err}");
        }
        *state = SessionState::Resolved(Some(id.clone()));
        id
    }

    /// Identifier, if resolution has completed and one exists.
    pub async fn current(&self) -> Option<SessionId> {
        self.state.read().await.session().cloned()
    }

    /// True until the cold-start storage read has completed.
    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading()
    }
}
