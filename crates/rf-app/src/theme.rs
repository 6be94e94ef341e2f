//! Process-lifetime theme state.

use std::sync::RwLock;

use rf_core::theme::Theme;

/// Theme selection for this process.
///
/// Initialized from the device-reported scheme at startup and changed only
/// via the explicit toggle. Deliberately not persisted: every launch starts
/// from the device preference again.
pub struct ThemeManager {
    theme: RwLock<Theme>,
}

impl ThemeManager {
    pub fn new(device_scheme: Option<Theme>) -> Self {
        Self {
            theme: RwLock::new(device_scheme.unwrap_or_default()),
        }
    }

    pub fn current(&self) -> Theme {
        *self.theme.read().unwrap()
    }

    /// Switch between light and dark, returning the new theme.
    pub fn toggle(&self) -> Theme {
        let mut theme = self.theme.write().unwrap();
        *theme = theme.toggled();
        *theme
    }
}
