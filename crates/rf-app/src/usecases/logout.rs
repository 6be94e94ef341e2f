use std::sync::Arc;

use log::info;

use rf_core::navigation::NavCommand;
use rf_core::ports::NavigatorPort;

/// "Sair" on the settings screen.
///
/// Pops navigation back to the tab root. The persisted session identifier
/// is intentionally left untouched: logging out resets the navigation
/// stack, nothing else.
pub struct Logout {
    navigator: Arc<dyn NavigatorPort>,
}

impl Logout {
    pub fn new(navigator: Arc<dyn NavigatorPort>) -> Self {
        Self { navigator }
    }

    pub fn execute(&self) {
        info!("logout pressed");
        self.navigator.dispatch(NavCommand::PopToTop);
    }
}
