use axum::{
    body::Body as AxumBody,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::warn;

use crate::services::auth_service;
use crate::web::{AppState, error::AppError};

/// Gate for owner-scoped routes: resolves the bearer token to a stored user
/// and attaches it as an `AuthenticatedUser` extension. Requests without a
/// valid token never reach the handler.
pub async fn auth(
    State(state): State<Arc<AppState>>,
    mut req: Request<AxumBody>,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(req.headers()).ok_or(AppError::MissingToken)?;

    let authenticated_user = auth_service::authenticate_token(&state.db_pool, &state.config, token)
        .await
        .inspect_err(|e| warn!(error = %e, "Bearer token rejected."))?;

    req.extensions_mut().insert(authenticated_user);
    Ok(next.run(req).await)
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}
