//! Per-request authentication gate.
//!
//! Runs once before any handler. A missing or unverifiable bearer token
//! degrades the request to anonymous; downstream handlers that need an
//! identity reject it via the `CurrentUser` extractor. A token that is
//! valid but revoked is rejected here with a "session ended" failure, and
//! a revocation store that cannot be reached fails the request closed
//! rather than letting a possibly-revoked token through.

use axum::async_trait;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::app_state::AppState;
use crate::domain::{Claims, Role};
use crate::errors::AuthError;
use crate::services::token_service::extract_bearer;

// API documentation paths are served without authentication.
const GATE_BYPASS_PREFIXES: [&str; 2] = ["/swagger-ui", "/v3/api-docs"];

/// Identity resolved by the gate, available to handlers via request
/// extensions. Carries the claims as issued; see `TokenService` for the
/// staleness contract.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: i64,
    pub login_id: String,
    pub email: String,
    pub nickname: String,
    pub role: Role,
}

impl CurrentUser {
    fn from_claims(claims: Claims) -> Option<Self> {
        let user_id = claims.sub.parse::<i64>().ok()?;
        Some(CurrentUser {
            user_id,
            login_id: claims.login_id,
            email: claims.email,
            nickname: claims.nickname,
            role: claims.role,
        })
    }

    pub fn require_role(&self, role: Role) -> Result<(), AuthError> {
        if self.role == role {
            Ok(())
        } else {
            Err(AuthError::Forbidden)
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AuthError::AuthenticationRequired)
    }
}

pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let path = request.uri().path();
    if GATE_BYPASS_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return Ok(next.run(request).await);
    }

    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(extract_bearer)
        .map(str::to_owned);

    let token = match token {
        Some(token) => token,
        // No usable header; the request proceeds anonymous.
        None => return Ok(next.run(request).await),
    };

    if !state.token_service.verify(&token) {
        log::warn!("invalid bearer token on {}", request.uri().path());
        return Ok(next.run(request).await);
    }

    match state.token_service.is_revoked(&token).await {
        Ok(true) => {
            log::warn!("revoked token presented on {}", request.uri().path());
            return Err(AuthError::SessionEnded);
        }
        Err(e) => {
            log::error!("revocation store check failed: {}", e);
            return Err(AuthError::RevocationStoreUnavailable);
        }
        Ok(false) => {}
    }

    // verify() passed, so the claims decode; a sub that is not a user id
    // means a token we never issued, treated as anonymous.
    let identity = state
        .token_service
        .decode_claims(&token)
        .ok()
        .and_then(CurrentUser::from_claims);

    match identity {
        Some(user) => {
            request.extensions_mut().insert(user);
        }
        None => log::warn!("verified token with undecodable claims on {}", request.uri().path()),
    }

    Ok(next.run(request).await)
}
