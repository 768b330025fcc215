use std::env;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts::{
    env as env_vars, DEFAULT_DATABASE_URL, DEFAULT_REDIS_HOST, DEFAULT_TOKEN_TTL_SECONDS,
    DEFAULT_UPLOAD_DIR,
};

/// Process-wide configuration, built once at startup and immutable for the
/// lifetime of the process. The JWT secret lives only here; rotating it
/// (restarting with a new value) invalidates every previously issued token.
#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    token_ttl_seconds: i64,
    database_url: String,
    redis_host: String,
    upload_dir: String,
}

impl Config {
    pub fn new(
        jwt_secret: String,
        token_ttl_seconds: i64,
        database_url: String,
        redis_host: String,
        upload_dir: String,
    ) -> Result<Self, ConfigError> {
        if jwt_secret.is_empty() {
            return Err(ConfigError::Invalid(env_vars::JWT_SECRET_ENV_VAR));
        }
        if token_ttl_seconds <= 0 {
            return Err(ConfigError::Invalid(env_vars::TOKEN_TTL_SECONDS_ENV_VAR));
        }
        Ok(Self {
            jwt_secret,
            token_ttl_seconds,
            database_url,
            redis_host,
            upload_dir,
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();

        let jwt_secret = req_var(env_vars::JWT_SECRET_ENV_VAR)?;
        let token_ttl_seconds = match opt_var(env_vars::TOKEN_TTL_SECONDS_ENV_VAR) {
            Some(raw) => raw
                .parse::<i64>()
                .map_err(|_| ConfigError::Invalid(env_vars::TOKEN_TTL_SECONDS_ENV_VAR))?,
            None => DEFAULT_TOKEN_TTL_SECONDS,
        };
        let database_url = opt_var(env_vars::DATABASE_URL_ENV_VAR)
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        let redis_host =
            opt_var(env_vars::REDIS_HOST_ENV_VAR).unwrap_or_else(|| DEFAULT_REDIS_HOST.to_string());
        let upload_dir =
            opt_var(env_vars::UPLOAD_DIR_ENV_VAR).unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string());

        Config::new(
            jwt_secret,
            token_ttl_seconds,
            database_url,
            redis_host,
            upload_dir,
        )
    }

    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
    pub fn token_ttl_seconds(&self) -> i64 {
        self.token_ttl_seconds
    }
    pub fn database_url(&self) -> &str {
        &self.database_url
    }
    pub fn redis_host(&self) -> &str {
        &self.redis_host
    }
    pub fn upload_dir(&self) -> &str {
        &self.upload_dir
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn req_var(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .map_err(|_| ConfigError::Missing(key))
        .and_then(|v| {
            if v.is_empty() {
                Err(ConfigError::Invalid(key))
            } else {
                Ok(v)
            }
        })
}

fn opt_var(key: &str) -> Option<String> {
    env::var(key).ok()
}
