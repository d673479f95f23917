//! Route table.
//!
//! Public routes need no credentials; protected routes are wrapped in the
//! bearer-token middleware by [`crate::web::create_axum_router`] and receive
//! the caller as an `AuthenticatedUser` extension.
//!
//! | Method | Path         | Auth   |
//! |--------|--------------|--------|
//! | POST   | /register    | none   |
//! | POST   | /login       | none   |
//! | POST   | /bookmarks/  | bearer |
//! | GET    | /bookmarks/  | bearer |
//! | GET    | /search/     | bearer |

use axum::Router;
use std::sync::Arc;

use crate::web::AppState;

pub mod auth_routes;
pub mod bookmark_routes;
pub mod search_routes;

pub fn public_router() -> Router<Arc<AppState>> {
    auth_routes::create_auth_router()
}

pub fn protected_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(bookmark_routes::create_bookmarks_router())
        .merge(search_routes::create_search_router())
}
