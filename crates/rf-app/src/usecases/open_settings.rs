use std::sync::Arc;

use rf_core::navigation::{NavCommand, Route};
use rf_core::ports::NavigatorPort;

/// Gear icon on any post-consultation tab.
pub struct OpenSettings {
    navigator: Arc<dyn NavigatorPort>,
}

impl OpenSettings {
    pub fn new(navigator: Arc<dyn NavigatorPort>) -> Self {
        Self { navigator }
    }

    pub fn execute(&self) {
        self.navigator
            .dispatch(NavCommand::Navigate(Route::Settings));
    }
}
