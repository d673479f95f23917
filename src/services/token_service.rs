use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::db::entities::user;
use crate::web::error::AppError;
use crate::web::models::Claims;

/// Signs an HS256 access token for `user`, valid for `ttl` from now.
pub fn create_access_token(user: &user::Model, jwt_secret: &str, ttl: Duration) -> Result<String, AppError> {
    issue_token_at(user, jwt_secret, ttl, Utc::now())
}

fn issue_token_at(
    user: &user::Model,
    jwt_secret: &str,
    ttl: Duration,
    now: DateTime<Utc>,
) -> Result<String, AppError> {
    let claims = Claims {
        sub: user.username.clone(),
        uid: user.id,
        iat: now.timestamp() as usize,
        exp: (now + ttl).timestamp() as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_ref()),
    )
    .map_err(|e| AppError::TokenCreationError(e.to_string()))
}

/// Checks signature, structure and expiry (no leeway) and returns the claims.
pub fn decode_access_token(token: &str, jwt_secret: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    decode::<Claims>(token, &DecodingKey::from_secret(jwt_secret.as_ref()), &validation)
        .map(|data| data.claims)
        .map_err(|e| AppError::InvalidToken(e.to_string()))
}
