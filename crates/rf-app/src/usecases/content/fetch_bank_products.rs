use std::sync::Arc;

use rf_core::content::BankProduct;
use rf_core::ports::{ContentClientPort, ContentError};

use super::{fetch_list, ContentFetch, FetchGeneration};
use crate::session::SessionManager;

/// Loads the partner bank offers for the "Meu Banco" tab.
pub struct FetchBankProducts {
    content: Arc<dyn ContentClientPort>,
    session: Arc<SessionManager>,
    generation: FetchGeneration,
}

impl FetchBankProducts {
    pub fn new(content: Arc<dyn ContentClientPort>, session: Arc<SessionManager>) -> Self {
        Self {
            content,
            session,
            generation: FetchGeneration::new(),
        }
    }

    pub async fn execute(&self) -> Result<ContentFetch<BankProduct>, ContentError> {
        fetch_list(
            self.content.as_ref(),
            &self.session,
            &self.generation,
            "/content/products",
        )
        .await
    }
}
