use serde::{Deserialize, Serialize};

use crate::db::entities::tag;
use crate::db::services::BookmarkWithTags;

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

/// OAuth2 password-form style login, sent as `application/x-www-form-urlencoded`.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}

impl TokenResponse {
    pub fn bearer(access_token: String) -> Self {
        Self {
            access_token,
            token_type: "bearer".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateBookmarkRequest {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keyword: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagResponse {
    pub id: i32,
    pub name: String,
}

impl From<tag::Model> for TagResponse {
    fn from(model: tag::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkResponse {
    pub id: i32,
    pub title: String,
    pub url: String,
    pub notes: Option<String>,
    pub owner_id: i32,
    pub tags: Vec<TagResponse>,
}

impl From<BookmarkWithTags> for BookmarkResponse {
    fn from(stored: BookmarkWithTags) -> Self {
        let BookmarkWithTags { bookmark, tags } = stored;
        Self {
            id: bookmark.id,
            title: bookmark.title,
            url: bookmark.url,
            notes: bookmark.notes,
            owner_id: bookmark.owner_id,
            tags: tags.into_iter().map(TagResponse::from).collect(),
        }
    }
}

// JWT Claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // username
    pub uid: i32,
    pub iat: usize,
    pub exp: usize,
}

/// The identity resolved from a verified bearer token, passed to handlers as
/// a request extension.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub username: String,
}
