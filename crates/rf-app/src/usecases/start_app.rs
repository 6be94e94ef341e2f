use std::sync::Arc;

use rf_core::navigation::Route;
use rf_core::ports::DeepLinkSourcePort;

use crate::deep_link_router::{DeepLinkRouter, DeepLinkSubscription};
use crate::navigation::NavigationController;
use crate::session::SessionManager;

/// Cold-start use case.
///
/// Resolves the persisted session, seeds the navigation stack with the
/// matching entry point and wires the deep-link subscription. Returns the
/// initial route plus the subscription guard the shell must hold while the
/// navigation container is alive.
pub struct StartApp {
    session: Arc<SessionManager>,
    navigation: Arc<NavigationController>,
    router: Arc<DeepLinkRouter>,
    deep_links: Arc<dyn DeepLinkSourcePort>,
}

impl StartApp {
    pub fn new(
        session: Arc<SessionManager>,
        navigation: Arc<NavigationController>,
        router: Arc<DeepLinkRouter>,
        deep_links: Arc<dyn DeepLinkSourcePort>,
    ) -> Self {
        Self {
            session,
            navigation,
            router,
            deep_links,
        }
    }

    pub async fn execute(&self) -> (Route, DeepLinkSubscription) {
        let resolved = self.session.resolve().await;
        let initial = self.navigation.start(resolved.persisted);
        let subscription = self
            .router
            .clone()
            .subscribe(self.deep_links.as_ref())
            .await;
        (initial, subscription)
    }
}
