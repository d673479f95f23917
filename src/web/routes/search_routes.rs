use axum::{
    Json, Router,
    extract::{Extension, Query, State},
    routing::get,
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;

use crate::db::services;
use crate::web::models::{AuthenticatedUser, BookmarkResponse, SearchQuery};
use crate::web::{AppError, AppState};

pub fn create_search_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/search", get(search_handler))
        .route("/search/", get(search_handler))
}

/// `GET /search/?keyword=` — case-sensitive title match over the caller's
/// bookmarks. A missing keyword behaves like an empty one and matches all.
async fn search_handler(
    Extension(authenticated_user): Extension<AuthenticatedUser>,
    State(app_state): State<Arc<AppState>>,
    WithRejection(Query(query), _): WithRejection<Query<SearchQuery>, AppError>,
) -> Result<Json<Vec<BookmarkResponse>>, AppError> {
    let bookmarks =
        services::search_bookmarks(&app_state.db_pool, authenticated_user.id, &query.keyword).await?;
    Ok(Json(bookmarks.into_iter().map(BookmarkResponse::from).collect()))
}
