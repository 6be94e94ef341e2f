use async_trait::async_trait;
use tokio::sync::mpsc;

/// Source of inbound deep-link URLs.
///
/// The shell delivers the URL that cold-started the app (if any) plus a live
/// stream of URLs received while running. The two may overlap for the same
/// link; consumers must tolerate duplicate delivery.
#[async_trait]
pub trait DeepLinkSourcePort: Send + Sync {
    /// The URL that launched the app, if it was opened via a link.
    async fn initial_url(&self) -> Option<String>;

    /// Subscribe to URLs delivered while the app is running.
    fn subscribe(&self) -> mpsc::Receiver<String>;
}
