use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    routing::post,
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;

use crate::services::auth_service;
use crate::web::models::{LoginRequest, MessageResponse, RegisterRequest, TokenResponse};
use crate::web::{AppError, AppState};

pub fn create_auth_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
}

async fn register_handler(
    State(app_state): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<RegisterRequest>, AppError>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    auth_service::register_user(&app_state.db_pool, &app_state.config, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created".to_string(),
        }),
    ))
}

async fn login_handler(
    State(app_state): State<Arc<AppState>>,
    WithRejection(Form(payload), _): WithRejection<Form<LoginRequest>, AppError>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = auth_service::login_user(&app_state.db_pool, &app_state.config, payload).await?;
    Ok(Json(token))
}
