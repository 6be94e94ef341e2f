//! # rf-infra
//!
//! Infrastructure adapters for Resgate Fácil: durable session storage, the
//! HTTP content client and the deep-link delivery channel the shell feeds.

pub mod app_dirs;
mod deep_link_channel;
mod http_content_client;
mod session_file_store;

pub use deep_link_channel::ChannelDeepLinkSource;
pub use http_content_client::HttpContentClient;
pub use session_file_store::{FileSessionStore, DEFAULT_SESSION_ID_FILE};
