use std::sync::Arc;

use rf_core::navigation::{NavCommand, Route};
use rf_core::ports::NavigatorPort;

/// Consultation finished; move into the post-consultation tabs.
///
/// Destructive on purpose: the back stack is cleared so the user cannot
/// return to the pre-consultation screens.
pub struct CompleteConsult {
    navigator: Arc<dyn NavigatorPort>,
}

impl CompleteConsult {
    pub fn new(navigator: Arc<dyn NavigatorPort>) -> Self {
        Self { navigator }
    }

    pub fn execute(&self) {
        self.navigator
            .dispatch(NavCommand::Reset(Route::pos_consult()));
    }
}
