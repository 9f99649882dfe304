//! Shared application state.

use crate::auth::JwtKeys;
use staylist_interface::MarketStore;
use std::sync::Arc;

/// State threaded through every handler.
#[derive(Clone)]
pub struct AppState {
    /// The backing store
    pub store: Arc<dyn MarketStore>,
    /// Token signing keys
    pub keys: Arc<JwtKeys>,
    /// Page size for sub-resource listings
    pub page_size: i64,
}

impl AppState {
    /// Assemble state from its parts.
    pub fn new(store: Arc<dyn MarketStore>, keys: JwtKeys, page_size: i64) -> Self {
        Self {
            store,
            keys: Arc::new(keys),
            page_size,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}
