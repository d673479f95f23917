//! One-way salted password hashing with bcrypt.
//!
//! bcrypt is deliberately slow, so both operations run on the blocking pool
//! instead of stalling a runtime worker.

use tokio::task;

use crate::web::error::AppError;

pub async fn hash_password(password: String, cost: u32) -> Result<String, AppError> {
    task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| AppError::InternalServerError(format!("Password hashing task failed: {e}")))?
        .map_err(|e| AppError::PasswordHashingError(e.to_string()))
}

/// Checks `password` against a stored bcrypt hash. A malformed stored hash is
/// an internal error, not a credential mismatch.
pub async fn verify_password(password: String, password_hash: String) -> Result<bool, AppError> {
    task::spawn_blocking(move || bcrypt::verify(password, &password_hash))
        .await
        .map_err(|e| AppError::InternalServerError(format!("Password verification task failed: {e}")))?
        .map_err(|e| AppError::InternalServerError(format!("Password verification failed: {e}")))
}
