use async_trait::async_trait;
use thiserror::Error;

use crate::session::SessionId;

#[derive(Debug, Error)]
pub enum ContentError {
    /// Non-success HTTP status. The body is not parsed in this case.
    #[error("content API call failed with status: {status}")]
    Api { status: u16 },

    /// The response body was not valid JSON.
    #[error("content response is not JSON: {0}")]
    Decode(String),

    /// The JSON did not match the expected payload shape.
    #[error("content payload shape mismatch: {0}")]
    Schema(String),

    /// Transport-level failure before any status was received.
    #[error("content request failed: {0}")]
    Network(String),
}

/// Read-only authenticated access to the remote content API.
///
/// One best-effort round trip per call: no retry, no timeout, no caching.
/// Callers own loading-state and error-state presentation.
#[async_trait]
pub trait ContentClientPort: Send + Sync {
    /// GET `path`, attaching the session identifier, and return the decoded
    /// JSON body.
    async fn get(
        &self,
        path: &str,
        session_id: &SessionId,
    ) -> Result<serde_json::Value, ContentError>;
}
