//! Consultation hand-off to the Banco Central site.
//!
//! The consultation opens in an embedded web view; showing it is a toggle
//! on the SvrConsult screen, not a route change. Navigation-state URLs
//! reported by the view are inspected so the backend's redirect back into
//! the app is caught even when the OS-level deep link never fires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;

use rf_core::config::AppConfig;
use rf_core::deeplink::is_app_redirect;

use crate::deep_link_router::DeepLinkRouter;

pub struct ConsultView {
    config: AppConfig,
    router: Arc<DeepLinkRouter>,
    open: AtomicBool,
}

impl ConsultView {
    pub fn new(config: AppConfig, router: Arc<DeepLinkRouter>) -> Self {
        Self {
            config,
            router,
            open: AtomicBool::new(false),
        }
    }

    /// URL the embedded view loads.
    pub fn consult_site_url(&self) -> &str {
        &self.config.consult_site_url
    }

    pub fn open(&self) {
        self.open.store(true, Ordering::SeqCst);
    }

    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Called for every navigation-state change of the embedded view.
    ///
    /// App redirects close the view and go through the regular deep-link
    /// routing; every other URL is the user browsing the external site.
    pub fn handle_navigation_state(&self, url: &str) {
        debug!("web view nav state: {}", url);
        if is_app_redirect(url, &self.config) {
            self.close();
            self.router.handle(url);
        }
    }
}
