use std::sync::Arc;

use rf_core::navigation::{NavCommand, PosConsultTab, Route};
use rf_core::ports::NavigatorPort;

/// Switch between the post-consultation tabs.
///
/// Tab changes update the current entry in place; they never grow the
/// back stack.
pub struct SelectTab {
    navigator: Arc<dyn NavigatorPort>,
}

impl SelectTab {
    pub fn new(navigator: Arc<dyn NavigatorPort>) -> Self {
        Self { navigator }
    }

    pub fn execute(&self, tab: PosConsultTab) {
        self.navigator
            .dispatch(NavCommand::Navigate(Route::PosConsult { tab }));
    }
}
