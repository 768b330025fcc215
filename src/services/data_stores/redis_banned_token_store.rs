use crate::domain::data_stores::{BannedTokenStore, BannedTokenStoreErr};

use super::redis_service::RedisService;

// Value content is irrelevant; only key existence matters.
const REVOKED_MARKER: &str = "revoked";

/// Production revocation store. Relies entirely on Redis key expiry for
/// cleanup; nothing here ever sweeps entries.
pub struct RedisBannedTokenStore {
    redis: RedisService,
}

impl RedisBannedTokenStore {
    pub fn new(redis: RedisService) -> Self {
        Self { redis }
    }
}

#[async_trait::async_trait]
impl BannedTokenStore for RedisBannedTokenStore {
    async fn store_token(
        &mut self,
        token: String,
        ttl_seconds: u64,
    ) -> Result<(), BannedTokenStoreErr> {
        self.redis
            .set_key_value(&token, REVOKED_MARKER, ttl_seconds)
            .await
            .map_err(|e| BannedTokenStoreErr::StoreUnavailable(e.to_string()))
    }

    async fn token_exists(&self, token: &str) -> Result<bool, BannedTokenStoreErr> {
        self.redis
            .exists(token)
            .await
            .map_err(|e| BannedTokenStoreErr::StoreUnavailable(e.to_string()))
    }
}
