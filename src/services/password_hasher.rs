use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordHashError {
    #[error("failed to hash password")]
    HashingFailed,

    #[error("stored hash is not a valid PHC string")]
    MalformedHash,
}

// Argon2id work is CPU-bound, so both operations run on the blocking pool.

pub async fn hash_password(password: &str) -> Result<String, PasswordHashError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || {
        let argon2 = Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            Params::new(15000, 2, 1, None).map_err(|_| PasswordHashError::HashingFailed)?,
        );
        let salt = SaltString::generate(&mut OsRng);
        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|_| PasswordHashError::HashingFailed)
    })
    .await
    .map_err(|_| PasswordHashError::HashingFailed)?
}

pub async fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordHashError> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    tokio::task::spawn_blocking(move || {
        let parsed_hash = PasswordHash::new(&hash).map_err(|_| PasswordHashError::MalformedHash)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    })
    .await
    .map_err(|_| PasswordHashError::HashingFailed)?
}
