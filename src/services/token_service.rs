//! Token issuance, verification and revocation.
//!
//! The `TokenService` owns the only two pieces of the authentication core:
//! - a signed, time-bounded access token (JWT, HS256) carrying the
//!   authenticated identity and role as claims
//! - a revocation list for tokens that are still cryptographically valid
//!   but were invalidated by logout
//!
//! Claims are embedded at issuance and never re-fetched, so an
//! authenticated request costs no user-store round trip. The flip side is
//! that a profile edit does not show up in already-issued tokens; that
//! staleness is an accepted contract, not a bug to fix with a live lookup.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::app_state::BannedTokenStoreType;
use crate::domain::{BannedTokenStoreErr, Claims, User};
use crate::utils::Config;

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl_seconds: i64,
    banned_tokens: BannedTokenStoreType,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("failed to sign token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    #[error("token timestamp out of range")]
    InvalidTimestamp,
}

/// Pull the token out of a raw `Authorization` header value.
///
/// Only the exact prefix `"Bearer "` is recognized (case-sensitive, single
/// space); anything else is treated as no token at all. Surrounding
/// whitespace in the remainder is trimmed.
pub fn extract_bearer(raw_header: &str) -> Option<&str> {
    raw_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl TokenService {
    /// Keys are derived from the config secret once, here; the service
    /// never reads ambient state afterwards.
    pub fn new(config: &Config, banned_tokens: BannedTokenStoreType) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret().as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret().as_bytes()),
            token_ttl_seconds: config.token_ttl_seconds(),
            banned_tokens,
        }
    }

    /// Sign a token for `user` with `iat = now` and `exp = now + ttl`.
    /// Pure computation, no side effects.
    pub fn issue(&self, user: &User) -> Result<String, TokenError> {
        let now = Utc::now();
        let delta =
            chrono::Duration::try_seconds(self.token_ttl_seconds).ok_or(TokenError::InvalidTimestamp)?;
        let exp = now
            .checked_add_signed(delta)
            .ok_or(TokenError::InvalidTimestamp)?
            .timestamp();

        let iat: usize = now
            .timestamp()
            .try_into()
            .map_err(|_| TokenError::InvalidTimestamp)?;
        let exp: usize = exp.try_into().map_err(|_| TokenError::InvalidTimestamp)?;

        let claims = Claims {
            sub: user.id.to_string(),
            login_id: user.login_id.clone(),
            email: user.email.as_ref().to_string(),
            nickname: user.nickname.clone(),
            role: user.role,
            iat,
            exp,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Signature and expiry check only; never errors. Malformed structure,
    /// bad signature, expired timestamp and parse failures all come back
    /// as `false`. Revocation is a separate concern checked by the caller.
    pub fn verify(&self, token: &str) -> bool {
        decode::<Claims>(token, &self.decoding_key, &strict_validation(true)).is_ok()
    }

    /// Only meaningful after `verify` returned true; an invalid token
    /// yields whatever error jsonwebtoken produces.
    pub fn decode_claims(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding_key, &strict_validation(true)).map(|data| data.claims)
    }

    /// Seconds until the token's natural expiry; non-positive means it is
    /// already unusable and must not be stored anywhere. Tokens that do
    /// not decode at all count as expired.
    pub fn remaining_lifetime(&self, token: &str) -> i64 {
        match decode::<Claims>(token, &self.decoding_key, &strict_validation(false)) {
            Ok(data) => data.claims.exp as i64 - Utc::now().timestamp(),
            Err(_) => 0,
        }
    }

    /// Revoke `token` for the rest of its natural lifetime. A token that
    /// has already expired needs no protection, so nothing is written.
    /// Idempotent; revoking twice is harmless. A store failure propagates
    /// so a logout never appears successful while the token stays usable.
    pub async fn revoke(&self, token: &str) -> Result<(), BannedTokenStoreErr> {
        let remaining = self.remaining_lifetime(token);
        if remaining <= 0 {
            return Ok(());
        }

        self.banned_tokens
            .write()
            .await
            .store_token(token.to_owned(), remaining as u64)
            .await
    }

    /// Fail-closed existence check: a store error is surfaced, not
    /// collapsed into "not revoked".
    pub async fn is_revoked(&self, token: &str) -> Result<bool, BannedTokenStoreErr> {
        self.banned_tokens.read().await.token_exists(token).await
    }
}

// Zero leeway so `exp` is enforced exactly; `with_exp` turns the expiry
// check off for callers that need the claims of an already-expired token.
fn strict_validation(with_exp: bool) -> Validation {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_exp = with_exp;
    validation
}
