use std::sync::Arc;

use crate::auth::SessionStore;
use crate::store::MemStore;

/// Shared handles handed to every handler. Constructed once in `main`;
/// tests build a fresh one each to get an isolated store.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<MemStore>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemStore::new()),
            sessions: SessionStore::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
