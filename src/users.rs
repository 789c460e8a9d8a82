// Account registration and login.
//
// Passwords are stored as Argon2 PHC strings. Lookups go through the
// Database trait, so the same code serves the CLI and the web handlers.

use std::sync::Arc;

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::db::models::User;
use crate::db::Database;

#[derive(Debug, Error)]
pub enum RegisterError {
    #[error("Email and password are required")]
    MissingField,

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {e}"))?;
    Ok(hash.to_string())
}

/// Check a password against a stored PHC string. A malformed hash never
/// verifies.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Create a local account.
pub async fn register(
    db: &Arc<dyn Database>,
    email: &str,
    password: &str,
) -> Result<User, RegisterError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(RegisterError::MissingField);
    }

    // Skip hashing when the email is already taken.
    if db.get_user_by_email(email).await?.is_some() {
        return Err(RegisterError::EmailTaken);
    }

    let hash = hash_password(password)?;
    let Some(id) = db.create_user(email, &hash).await? else {
        return Err(RegisterError::EmailTaken);
    };

    let user = db
        .get_user(id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("User {id} vanished right after insert"))?;

    info!(user_id = user.id, "Registered new account");
    Ok(user)
}

/// Look up an account and check its password.
///
/// Unknown email and wrong password both return `Ok(None)`.
pub async fn authenticate(
    db: &Arc<dyn Database>,
    email: &str,
    password: &str,
) -> Result<Option<User>> {
    let Some(user) = db.get_user_by_email(email.trim()).await? else {
        warn!("Login failed: unknown account");
        return Ok(None);
    };

    if !verify_password(password, &user.password_hash) {
        warn!(user_id = user.id, "Login failed: wrong password");
        return Ok(None);
    }

    db.record_login(user.id).await?;
    info!(user_id = user.id, "Login succeeded");
    Ok(Some(user))
}
