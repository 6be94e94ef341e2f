//! HTTP adapter for the content API.

use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;

use rf_core::config::SESSION_HEADER;
use rf_core::ports::{ContentClientPort, ContentError};
use rf_core::session::SessionId;

/// Authenticated GET client against the fixed content API base URL.
pub struct HttpContentClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpContentClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ContentClientPort for HttpContentClient {
    async fn get(
        &self,
        path: &str,
        session_id: &SessionId,
    ) -> Result<serde_json::Value, ContentError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(SESSION_HEADER, session_id.as_str())
            .send()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The body carries no contract on non-2xx; don't touch it.
            return Err(ContentError::Api {
                status: status.as_u16(),
            });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_returns_json_body_on_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/content/guides")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"title": "Pix", "steps": ["passo 1"]}]"#)
            .create_async()
            .await;

        let client = HttpContentClient::new(server.url());
        let value = client
            .get("/content/guides", &SessionId::from("abc"))
            .await
            .unwrap();

        assert_eq!(value, json!([{"title": "Pix", "steps": ["passo 1"]}]));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_session_header_carries_the_exact_identifier() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/content/faqs")
            .match_header("x-session-id", "abc")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let client = HttpContentClient::new(server.url());
        let value = client
            .get("/content/faqs", &SessionId::from("abc"))
            .await
            .unwrap();

        assert_eq!(value, json!([]));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_fails_with_api_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/content/faqs")
            .with_status(500)
            // Deliberately unparseable; the body must never be read on error.
            .with_body("{this is not json")
            .create_async()
            .await;

        let client = HttpContentClient::new(server.url());
        let result = client.get("/content/faqs", &SessionId::from("abc")).await;

        assert!(matches!(result, Err(ContentError::Api { status: 500 })));
    }

    #[tokio::test]
    async fn test_not_found_maps_to_api_error_with_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/content/missing")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpContentClient::new(server.url());
        let result = client.get("/content/missing", &SessionId::from("abc")).await;

        assert!(matches!(result, Err(ContentError::Api { status: 404 })));
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_a_decode_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/content/guides")
            .with_status(200)
            .with_body("<html>definitely not json</html>")
            .create_async()
            .await;

        let client = HttpContentClient::new(server.url());
        let result = client.get("/content/guides", &SessionId::from("abc")).await;

        assert!(matches!(result, Err(ContentError::Decode(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_network_error() {
        // Nothing listens on this port.
        let client = HttpContentClient::new("http://127.0.0.1:1");
        let result = client.get("/content/guides", &SessionId::from("abc")).await;

        assert!(matches!(result, Err(ContentError::Network(_))));
    }
}
