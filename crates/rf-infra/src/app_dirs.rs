//! Application data directory resolution.

use std::path::PathBuf;

const APP_DIR_NAME: &str = "resgate-facil";

/// Platform data directory for this app.
///
/// Falls back to a relative directory when the platform reports none
/// (containerized test environments).
pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}
