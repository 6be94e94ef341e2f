use std::sync::Arc;

use rf_core::theme::Theme;

use crate::theme::ThemeManager;

/// Theme button on the settings screen.
pub struct ToggleTheme {
    theme: Arc<ThemeManager>,
}

impl ToggleTheme {
    pub fn new(theme: Arc<ThemeManager>) -> Self {
        Self { theme }
    }

    pub fn execute(&self) -> Theme {
        self.theme.toggle()
    }
}
