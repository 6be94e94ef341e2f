use std::sync::Arc;

use rf_core::navigation::{NavCommand, Route};
use rf_core::ports::NavigatorPort;

/// User confirms the Gov.br account instructions and moves on to the
/// consultation screen.
pub struct AcknowledgeRequirements {
    navigator: Arc<dyn NavigatorPort>,
}

impl AcknowledgeRequirements {
    pub fn new(navigator: Arc<dyn NavigatorPort>) -> Self {
        Self { navigator }
    }

    pub fn execute(&self) {
        self.navigator
            .dispatch(NavCommand::Navigate(Route::SvrConsult));
    }
}
