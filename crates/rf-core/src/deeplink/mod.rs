//! Inbound deep-link classification.
//!
//! URLs reach the app either at cold start or as live events while running.
//! Each delivery is classified exactly once and then discarded; nothing here
//! is persisted.

use std::collections::HashMap;

use url::Url;

use crate::config::AppConfig;

const SUCCESS_MARKER: &str = "auth-success";
const FAILURE_MARKER: &str = "auth-failure";

/// Outcome of classifying one inbound URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLink {
    /// The backend reported a completed Gov.br authentication.
    AuthSuccess { token: Option<String> },
    /// The backend reported a failed Gov.br authentication.
    AuthFailure { error: Option<String> },
    /// Anything else; no action is taken.
    Unrecognized,
}

/// Classify a raw URL. First match wins: success marker, then failure
/// marker, then unrecognized.
///
/// The marker is searched in the parsed path and, as a fallback, in the raw
/// string: scheme-only links such as `valoresareceberapp://auth-success` put
/// the marker where strict parsing does not call it a path.
pub fn classify(raw: &str) -> DeepLink {
    if raw.is_empty() {
        return DeepLink::Unrecognized;
    }

    let path = Url::parse(raw)
        .map(|u| u.path().to_string())
        .unwrap_or_default();
    let params = query_params(raw);

    if path.contains(SUCCESS_MARKER) || raw.contains(SUCCESS_MARKER) {
        DeepLink::AuthSuccess {
            token: params.get("token").cloned(),
        }
    } else if path.contains(FAILURE_MARKER) || raw.contains(FAILURE_MARKER) {
        DeepLink::AuthFailure {
            error: params.get("error").cloned(),
        }
    } else {
        DeepLink::Unrecognized
    }
}

/// Whether a navigation-state URL from the embedded web view is the backend
/// handing control back to the app.
pub fn is_app_redirect(url: &str, config: &AppConfig) -> bool {
    url.starts_with(&config.deep_link_scheme)
        || url.contains(&config.success_redirect_path)
        || url.contains(&config.failure_redirect_path)
}

/// Query parameters of a raw URL, percent-decoded. The last value wins on
/// duplicate keys.
fn query_params(raw: &str) -> HashMap<String, String> {
    let query = match raw.split_once('?') {
        Some((_, rest)) => rest.split('#').next().unwrap_or(""),
        None => "",
    };
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
