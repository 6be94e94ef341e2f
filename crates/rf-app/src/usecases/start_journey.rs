use std::sync::Arc;

use rf_core::navigation::{NavCommand, Route};
use rf_core::ports::NavigatorPort;
use rf_core::session::SessionId;

use crate::session::SessionManager;

/// "Começar Agora" on the welcome screen.
///
/// Guarantees a session identifier exists, creating one on demand, before
/// moving on to the Gov.br requirement instructions.
pub struct StartJourney {
    session: Arc<SessionManager>,
    navigator: Arc<dyn NavigatorPort>,
}

impl StartJourney {
    pub fn new(session: Arc<SessionManager>, navigator: Arc<dyn NavigatorPort>) -> Self {
        Self { session, navigator }
    }

    pub async fn execute(&self) -> SessionId {
        let id = self.session.get_or_create().await;
        self.navigator
            .dispatch(NavCommand::Navigate(Route::GovBrRequirements));
        id
    }
}
