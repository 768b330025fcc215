use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::domain::data_stores::{BannedTokenStore, BannedTokenStoreErr};

/// In-memory revocation store used by tests and local development.
/// Mirrors the Redis behavior: entries carry a deadline and stop existing
/// once it passes, even though the map itself is never swept.
pub struct HashsetBannedTokenStore {
    store: HashMap<String, Instant>,
}

impl HashsetBannedTokenStore {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
        }
    }
}

impl Default for HashsetBannedTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BannedTokenStore for HashsetBannedTokenStore {
    async fn store_token(
        &mut self,
        token: String,
        ttl_seconds: u64,
    ) -> Result<(), BannedTokenStoreErr> {
        let deadline = Instant::now() + Duration::from_secs(ttl_seconds);
        // Re-inserting an existing token just refreshes its deadline.
        self.store.insert(token, deadline);
        Ok(())
    }

    async fn token_exists(&self, token: &str) -> Result<bool, BannedTokenStoreErr> {
        Ok(self
            .store
            .get(token)
            .is_some_and(|deadline| *deadline > Instant::now()))
    }
}
