//! Application dependency grouping.
//!
//! This is NOT a builder: no build steps, no default values, no hidden
//! logic. Just parameter grouping for App construction, so tests can supply
//! fakes without any global setup.

use std::sync::Arc;

use rf_core::ports::{ContentClientPort, DeepLinkSourcePort, SessionStorePort};

/// All infrastructure ports the application needs. Every field is required.
pub struct AppDeps {
    /// Durable storage for the session identifier.
    pub session_store: Arc<dyn SessionStorePort>,

    /// Authenticated access to the content API.
    pub content: Arc<dyn ContentClientPort>,

    /// Deep-link URL delivery from the shell.
    pub deep_links: Arc<dyn DeepLinkSourcePort>,
}
