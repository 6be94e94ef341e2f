use std::sync::Arc;

use rf_core::content::ContentCard;
use rf_core::ports::{ContentClientPort, ContentError};

use super::{fetch_list, ContentFetch, FetchGeneration};
use crate::session::SessionManager;

/// Loads the reclaim guide cards for the "Guia" tab.
pub struct FetchGuides {
    content: Arc<dyn ContentClientPort>,
    session: Arc<SessionManager>,
    generation: FetchGeneration,
}

impl FetchGuides {
    pub fn new(content: Arc<dyn ContentClientPort>, session: Arc<SessionManager>) -> Self {
        Self {
            content,
            session,
            generation: FetchGeneration::new(),
        }
    }

    pub async fn execute(&self) -> Result<ContentFetch<ContentCard>, ContentError> {
        fetch_list(
            self.content.as_ref(),
            &self.session,
            &self.generation,
            "/content/guides",
        )
        .await
    }
}
