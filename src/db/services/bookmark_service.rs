use chrono::Utc;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use std::collections::HashSet;
use tracing::info;

use crate::db::entities::{bookmark, bookmark_tag, tag};
use crate::db::services::tag_service;

/// Input for [`create_bookmark`]. The owner is passed separately and always
/// comes from the authenticated identity.
#[derive(Debug, Clone)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub notes: Option<String>,
    pub tag_names: Vec<String>,
}

/// A stored bookmark together with its resolved tags (sorted by name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkWithTags {
    pub bookmark: bookmark::Model,
    pub tags: Vec<tag::Model>,
}

// --- Bookmark Service Functions ---

/// Creates a bookmark owned by `owner_id` and links it to its tags.
///
/// The bookmark row, any newly created tags and all join rows are written in
/// one transaction; an error anywhere leaves nothing behind.
pub async fn create_bookmark(
    db: &DatabaseConnection,
    owner_id: i32,
    new_bookmark: NewBookmark,
) -> Result<BookmarkWithTags, DbErr> {
    let tag_names = dedup_tag_names(&new_bookmark.tag_names);
    for name in &tag_names {
        tag_service::check_tag_name(name)?;
    }

    let txn = db.begin().await?;

    let saved = bookmark::ActiveModel {
        title: Set(new_bookmark.title),
        url: Set(new_bookmark.url),
        notes: Set(new_bookmark.notes),
        owner_id: Set(owner_id),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    let mut tags = Vec::with_capacity(tag_names.len());
    for name in tag_names {
        tags.push(tag_service::resolve_tag(&txn, name).await?);
    }

    if !tags.is_empty() {
        let links = tags.iter().map(|t| bookmark_tag::ActiveModel {
            bookmark_id: Set(saved.id),
            tag_id: Set(t.id),
        });
        bookmark_tag::Entity::insert_many(links)
            .exec_without_returning(&txn)
            .await?;
    }

    txn.commit().await?;

    info!(
        bookmark_id = saved.id,
        user_id = owner_id,
        tag_count = tags.len(),
        "Bookmark created."
    );

    tags.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(BookmarkWithTags {
        bookmark: saved,
        tags,
    })
}

/// All bookmarks owned by `owner_id`, in insertion order.
pub async fn list_bookmarks_for_owner<C>(db: &C, owner_id: i32) -> Result<Vec<BookmarkWithTags>, DbErr>
where
    C: ConnectionTrait,
{
    let bookmarks = bookmark::Entity::find()
        .filter(bookmark::Column::OwnerId.eq(owner_id))
        .order_by_asc(bookmark::Column::Id)
        .all(db)
        .await?;
    attach_tags(db, bookmarks).await
}

/// Bookmarks owned by `owner_id` whose title contains `keyword`
/// (case-sensitive). An empty keyword matches every bookmark.
///
/// The database narrows candidates with an escaped LIKE, but LIKE folds case
/// on SQLite, so the exact containment test runs here.
pub async fn search_bookmarks<C>(
    db: &C,
    owner_id: i32,
    keyword: &str,
) -> Result<Vec<BookmarkWithTags>, DbErr>
where
    C: ConnectionTrait,
{
    let mut query = bookmark::Entity::find().filter(bookmark::Column::OwnerId.eq(owner_id));
    if !keyword.is_empty() {
        let pattern = format!("%{}%", escape_like(keyword));
        query = query.filter(Expr::col(bookmark::Column::Title).like(LikeExpr::new(pattern).escape('\\')));
    }

    let bookmarks: Vec<bookmark::Model> = query
        .order_by_asc(bookmark::Column::Id)
        .all(db)
        .await?
        .into_iter()
        .filter(|b| b.title.contains(keyword))
        .collect();
    attach_tags(db, bookmarks).await
}

async fn attach_tags<C>(db: &C, bookmarks: Vec<bookmark::Model>) -> Result<Vec<BookmarkWithTags>, DbErr>
where
    C: ConnectionTrait,
{
    let ids: Vec<i32> = bookmarks.iter().map(|b| b.id).collect();
    let mut tags_by_bookmark = tag_service::get_tags_for_bookmarks(db, &ids).await?;

    Ok(bookmarks
        .into_iter()
        .map(|bookmark| {
            let tags = tags_by_bookmark.remove(&bookmark.id).unwrap_or_default();
            BookmarkWithTags { bookmark, tags }
        })
        .collect())
}

/// Drops repeated names, keeping first-seen order.
fn dedup_tag_names(names: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(String::as_str)
        .filter(|name| seen.insert(*name))
        .collect()
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
