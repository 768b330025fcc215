use super::BannedTokenStoreErr;

/// Server-side revocation list for tokens that are still cryptographically
/// valid but must be rejected (post-logout).
///
/// Entries carry a TTL equal to the token's remaining lifetime at the time
/// of revocation, so the store self-prunes and never outlives the token's
/// natural expiry. Both operations surface store unavailability as an
/// error; callers fail closed.
#[async_trait::async_trait]
pub trait BannedTokenStore: Send + Sync {
    /// Record `token` as revoked for `ttl_seconds`. Storing a token that is
    /// already present is harmless.
    async fn store_token(&mut self, token: String, ttl_seconds: u64)
        -> Result<(), BannedTokenStoreErr>;

    async fn token_exists(&self, token: &str) -> Result<bool, BannedTokenStoreErr>;
}
