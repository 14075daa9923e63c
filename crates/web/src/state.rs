use storage::Database;

use crate::cache::QueryCache;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub cache: QueryCache,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            cache: QueryCache::new(),
        }
    }
}
