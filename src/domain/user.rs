use serde::{Deserialize, Serialize};

use super::email::Email;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "ROLE_USER")]
    User,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }

    pub fn parse(value: &str) -> Result<Role, String> {
        match value {
            "ROLE_USER" => Ok(Role::User),
            "ROLE_ADMIN" => Ok(Role::Admin),
            other => Err(format!("unknown role {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub login_id: String,
    pub password_hash: String,
    pub email: Email,
    pub nickname: String,
    pub profile_img: String,
    pub role: Role,
    pub created_at: i64,
    pub updated_at: i64,
}

// A user as it exists before the store has assigned an id.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub login_id: String,
    pub password_hash: String,
    pub email: Email,
    pub nickname: String,
    pub profile_img: String,
    pub role: Role,
}
