//! Content fetch use cases.
//!
//! One use case per informational screen. All of them follow the same
//! contract: no request leaves without a resolved session identifier, and a
//! response that comes back after a newer fetch started is discarded.

mod fetch_bank_products;
mod fetch_faqs;
mod fetch_gov_requirements;
mod fetch_guides;
mod generation;

pub use fetch_bank_products::FetchBankProducts;
pub use fetch_faqs::FetchFaqs;
pub use fetch_gov_requirements::FetchGovRequirements;
pub use fetch_guides::FetchGuides;
pub use generation::FetchGeneration;

use log::debug;
use serde::de::DeserializeOwned;

use rf_core::content::decode_list;
use rf_core::ports::{ContentClientPort, ContentError};

use crate::session::SessionManager;

/// Outcome of a content fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentFetch<T> {
    /// Fresh data for the current generation.
    Loaded(Vec<T>),
    /// No resolved session identifier; no request was issued.
    SkippedNoSession,
    /// A newer fetch started while this one was in flight; the payload was
    /// discarded.
    Superseded,
}

pub(crate) async fn fetch_list<T>(
    content: &dyn ContentClientPort,
    session: &SessionManager,
    generation: &FetchGeneration,
    path: &str,
) -> Result<ContentFetch<T>, ContentError>
where
    T: DeserializeOwned,
{
    let session_id = match session.current().await {
        Some(id) => id,
        None => {
            debug!("no session id resolved, skipping fetch of {}", path);
            return Ok(ContentFetch::SkippedNoSession);
        }
    };

    let ticket = generation.begin();
    let value = content.get(path, &session_id).await?;
    if !generation.is_current(ticket) {
        debug!("discarding superseded response for {}", path);
        return Ok(ContentFetch::Superseded);
    }

    Ok(ContentFetch::Loaded(decode_list(value)?))
}
