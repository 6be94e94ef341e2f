//! Application configuration domain model

use serde::{Deserialize, Serialize};

/// HTTP header carrying the session identifier on every content request.
pub const SESSION_HEADER: &str = "X-Session-ID";

/// Application configuration
///
/// Fixed endpoints and URL patterns the app talks to. Defaults carry the
/// production constants; all fields can be overridden through deserialization
/// for test and staging builds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Backend that terminates the Gov.br OAuth hand-off
    pub backend_url: String,

    /// Base URL of the read-only content API
    pub api_base_url: String,

    /// Scheme the OS routes back into the app
    pub deep_link_scheme: String,

    /// Callback path the backend redirects to after a successful login
    pub success_redirect_path: String,

    /// Callback path the backend redirects to after a failed login
    pub failure_redirect_path: String,

    /// Official Banco Central consultation site, opened in the embedded view
    pub consult_site_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend_url: "https://localhost:8080".to_string(),
            api_base_url: "http://10.0.2.2:8080/api".to_string(),
            deep_link_scheme: "valoresareceberapp://".to_string(),
            success_redirect_path: "/auth-success".to_string(),
            failure_redirect_path: "/auth-failure".to_string(),
            consult_site_url: "https://valoresareceber.bcb.gov.br".to_string(),
        }
    }
}
