pub mod env {
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
    pub const TOKEN_TTL_SECONDS_ENV_VAR: &str = "TOKEN_TTL_SECONDS";
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const REDIS_HOST_ENV_VAR: &str = "REDIS_HOST";
    pub const UPLOAD_DIR_ENV_VAR: &str = "UPLOAD_DIR";
}

pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 600;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db";
pub const DEFAULT_REDIS_HOST: &str = "127.0.0.1:6379";
pub const DEFAULT_UPLOAD_DIR: &str = "uploads/profiles";

/// Served in place of a profile image the user never uploaded. Never
/// written or deleted by the image store.
pub const DEFAULT_PROFILE_IMAGE: &str = "/images/default-profile.jpg";
