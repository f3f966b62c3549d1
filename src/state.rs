//! Shared application state for all routes.

use crate::store::Store;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    /// Fallback current user for requests without `X-User-Id`.
    pub default_user_id: Option<i32>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, default_user_id: Option<i32>) -> Self {
        AppState {
            store,
            default_user_id,
        }
    }

    pub fn store(&self) -> &dyn Store {
        self.store.as_ref()
    }
}
