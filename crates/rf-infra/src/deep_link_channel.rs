//! In-process deep-link delivery channel.
//!
//! The native shell pushes every URL the OS hands to the app; the router
//! subscribes on startup. Slow or torn-down subscribers only lose their own
//! deliveries.

use std::sync::Mutex;

use async_trait::async_trait;
use log::warn;
use tokio::sync::mpsc;

use rf_core::ports::DeepLinkSourcePort;

const CHANNEL_CAPACITY: usize = 16;

pub struct ChannelDeepLinkSource {
    initial_url: Mutex<Option<String>>,
    subscribers: Mutex<Vec<mpsc::Sender<String>>>,
}

impl ChannelDeepLinkSource {
    /// `initial_url` is the URL that cold-started the app, if any.
    pub fn new(initial_url: Option<String>) -> Self {
        Self {
            initial_url: Mutex::new(initial_url),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Deliver a URL received while the app is running.
    pub fn deliver(&self, url: impl Into<String>) {
        let url = url.into();
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|sender| match sender.try_send(url.clone()) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Closed(_)) => false,
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!("deep link channel full, dropping url");
                true
            }
        });
    }
}

#[async_trait]
impl DeepLinkSourcePort for ChannelDeepLinkSource {
    async fn initial_url(&self) -> Option<String> {
        self.initial_url.lock().unwrap().clone()
    }

    fn subscribe(&self) -> mpsc::Receiver<String> {
        let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);
        self.subscribers.lock().unwrap().push(tx);
        rx
    }
}
