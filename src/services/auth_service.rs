use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use crate::db::entities::user;
use crate::db::services::{user_service, is_unique_violation};
use crate::server::config::ServerConfig;
use crate::services::{password_service, token_service};
use crate::web::error::AppError;
use crate::web::models::{AuthenticatedUser, LoginRequest, RegisterRequest, TokenResponse};

pub async fn register_user(
    pool: &DatabaseConnection,
    config: &ServerConfig,
    req: RegisterRequest,
) -> Result<user::Model, AppError> {
    if req.username.trim().is_empty() || req.password.is_empty() {
        return Err(AppError::ValidationError(
            "Username and password must not be empty.".to_string(),
        ));
    }

    let password_hash = password_service::hash_password(req.password, config.bcrypt_cost).await?;

    match user_service::create_user(pool, &req.username, &password_hash).await {
        Ok(user_model) => {
            info!(user_id = user_model.id, "User registered.");
            Ok(user_model)
        }
        Err(e) if is_unique_violation(&e) => Err(AppError::DuplicateUsername(req.username)),
        Err(e) => Err(e.into()),
    }
}

pub async fn login_user(
    pool: &DatabaseConnection,
    config: &ServerConfig,
    req: LoginRequest,
) -> Result<TokenResponse, AppError> {
    let user_model = match user_service::get_user_by_username(pool, &req.username).await? {
        Some(u) => u,
        None => {
            // Spend the same bcrypt work as a real check so response time does
            // not reveal whether the username exists.
            password_service::hash_password(req.password, config.bcrypt_cost).await?;
            warn!("Login rejected: unknown username.");
            return Err(AppError::InvalidCredentials);
        }
    };

    let valid_password =
        password_service::verify_password(req.password, user_model.password_hash.clone()).await?;
    if !valid_password {
        warn!(user_id = user_model.id, "Login rejected: wrong password.");
        return Err(AppError::InvalidCredentials);
    }

    let token = token_service::create_access_token(&user_model, &config.jwt_secret, config.token_ttl())?;
    info!(user_id = user_model.id, "User logged in.");
    Ok(TokenResponse::bearer(token))
}

/// Resolves a bearer token to the stored user it was issued for. Fails with
/// `InvalidToken` when the token does not verify or its subject no longer
/// matches a stored user.
pub async fn authenticate_token(
    pool: &DatabaseConnection,
    config: &ServerConfig,
    token: &str,
) -> Result<AuthenticatedUser, AppError> {
    let claims = token_service::decode_access_token(token, &config.jwt_secret)?;

    let user_model = user_service::get_user_by_id(pool, claims.uid)
        .await?
        .filter(|u| u.username == claims.sub)
        .ok_or_else(|| AppError::InvalidToken("token subject does not match a user".to_string()))?;

    Ok(AuthenticatedUser {
        id: user_model.id,
        username: user_model.username,
    })
}
