//! Production wiring.

use std::sync::Arc;

use rf_app::{App, AppDeps};
use rf_core::config::AppConfig;
use rf_core::theme::Theme;
use rf_infra::{app_dirs, ChannelDeepLinkSource, FileSessionStore, HttpContentClient};

/// Initialize logging for host processes without a native logger.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env().try_init();
}

/// Assemble the production application.
///
/// `initial_url` is the URL that cold-started the app, if any, and
/// `device_scheme` the device-reported color scheme. The returned channel is
/// where the shell pushes every deep link the OS delivers while running.
pub fn build_app(
    config: AppConfig,
    initial_url: Option<String>,
    device_scheme: Option<Theme>,
) -> (App, Arc<ChannelDeepLinkSource>) {
    let deep_links = Arc::new(ChannelDeepLinkSource::new(initial_url));

    let deps = AppDeps {
        session_store: Arc::new(FileSessionStore::with_defaults(app_dirs::data_dir())),
        content: Arc::new(HttpContentClient::new(config.api_base_url.clone())),
        deep_links: deep_links.clone(),
    };

    (App::new(config, deps, device_scheme), deep_links)
}
