//! Deep-link routing.
//!
//! Translates each inbound URL into at most one navigation side effect.
//! The cold-start URL and the live event stream may deliver the same link
//! twice; re-processing the same classification leaves the stack unchanged
//! because navigating to the current screen is a no-op.

use std::sync::Arc;

use log::{debug, error, info};
use tokio::task::JoinHandle;

use rf_core::deeplink::{classify, DeepLink};
use rf_core::navigation::{NavCommand, Route};
use rf_core::ports::{DeepLinkSourcePort, NavigatorPort};

pub struct DeepLinkRouter {
    navigator: Arc<dyn NavigatorPort>,
}

impl DeepLinkRouter {
    pub fn new(navigator: Arc<dyn NavigatorPort>) -> Self {
        Self { navigator }
    }

    /// Process one delivered URL. Empty input is a no-op.
    pub fn handle(&self, url: &str) {
        if url.is_empty() {
            return;
        }
        debug!("deep link URL: {}", url);

        match classify(url) {
            DeepLink::AuthSuccess { token } => {
                info!(
                    "Gov.br authentication succeeded, token present: {}",
                    token.is_some()
                );
                // TODO: exchange the token with the backend once the Gov.br
                // profile check endpoint lands.
                self.navigator
                    .dispatch(NavCommand::Navigate(Route::SvrConsult));
            }
            DeepLink::AuthFailure { error } => {
                error!("Gov.br authentication failed: {:?}", error);
                self.navigator.dispatch(NavCommand::Navigate(Route::GovBrLogin {
                    error_message: error,
                }));
            }
            DeepLink::Unrecognized => {
                debug!("unrecognized deep link, ignoring");
            }
        }
    }

    /// Wire the router to a deep-link source: the cold-start URL is
    /// processed first, then live events until the returned guard drops.
    pub async fn subscribe(
        self: Arc<Self>,
        source: &dyn DeepLinkSourcePort,
    ) -> DeepLinkSubscription {
        let initial = source.initial_url().await;
        let mut events = source.subscribe();

        let router = self;
        let handle = tokio::spawn(async move {
            if let Some(url) = initial {
                router.handle(&url);
            }
            while let Some(url) = events.recv().await {
                router.handle(&url);
            }
        });

        DeepLinkSubscription { handle }
    }
}

/// Guard for the live URL subscription.
///
/// Dropping it stops the task, so no navigation fires after the hosting
/// view is gone.
pub struct DeepLinkSubscription {
    handle: JoinHandle<()>,
}

impl Drop for DeepLinkSubscription {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
