use axum::{
    Json, Router,
    extract::{Extension, State},
    http::StatusCode,
    routing::post,
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;

use crate::db::services::{self, NewBookmark};
use crate::web::models::{AuthenticatedUser, BookmarkResponse, CreateBookmarkRequest};
use crate::web::{AppError, AppState};

pub fn create_bookmarks_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bookmarks", post(create_bookmark_handler).get(list_bookmarks_handler))
        .route("/bookmarks/", post(create_bookmark_handler).get(list_bookmarks_handler))
}

impl CreateBookmarkRequest {
    fn validate(&self) -> Result<(), AppError> {
        if self.title.trim().is_empty() {
            return Err(AppError::ValidationError("title must not be empty".to_string()));
        }
        if self.url.trim().is_empty() {
            return Err(AppError::ValidationError("url must not be empty".to_string()));
        }
        if self.tags.iter().any(|t| t.trim().is_empty()) {
            return Err(AppError::ValidationError("tag names must not be empty".to_string()));
        }
        Ok(())
    }
}

async fn create_bookmark_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    WithRejection(Json(payload), _): WithRejection<Json<CreateBookmarkRequest>, AppError>,
) -> Result<(StatusCode, Json<BookmarkResponse>), AppError> {
    payload.validate()?;

    let created = services::create_bookmark(
        &app_state.db_pool,
        authenticated_user.id,
        NewBookmark {
            title: payload.title,
            url: payload.url,
            notes: payload.notes,
            tag_names: payload.tags,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

async fn list_bookmarks_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookmarkResponse>>, AppError> {
    let bookmarks = services::list_bookmarks_for_owner(&app_state.db_pool, authenticated_user.id).await?;
    Ok(Json(bookmarks.into_iter().map(BookmarkResponse::from).collect()))
}
