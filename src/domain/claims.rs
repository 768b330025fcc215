use serde::{Deserialize, Serialize};

use super::user::Role;

/// Claims embedded in an access token at issuance.
///
/// The profile fields are denormalized copies taken at login time and are
/// never refreshed while the token lives; a profile edit does not show up
/// here until the next login issues a new token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id, stable and never reused.
    pub sub: String,
    pub login_id: String,
    pub email: String,
    pub nickname: String,
    pub role: Role,
    pub iat: usize,
    pub exp: usize,
}
