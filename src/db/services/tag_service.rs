use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set};
use std::collections::HashMap;
use tracing::debug;

use crate::db::entities::{bookmark_tag, tag};

// --- Tag Service Functions ---

/// Get-or-create for a tag name.
///
/// The insert is an `ON CONFLICT (name) DO NOTHING` upsert, so two requests
/// resolving the same new name concurrently both end up with the single row
/// the unique index allows. Call this inside the transaction that links the
/// tag so a rollback also discards a freshly created tag.
pub async fn resolve_tag<C>(db: &C, name: &str) -> Result<tag::Model, DbErr>
where
    C: ConnectionTrait,
{
    check_tag_name(name)?;

    let candidate = tag::ActiveModel {
        name: Set(name.to_owned()),
        ..Default::default()
    };
    let inserted = tag::Entity::insert(candidate)
        .on_conflict(OnConflict::column(tag::Column::Name).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;
    if inserted > 0 {
        debug!(tag = %name, "Created new tag.");
    }

    get_tag_by_name(db, name)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("tag '{name}' missing after upsert")))
}

/// Tag names must contain at least one non-whitespace character.
pub fn check_tag_name(name: &str) -> Result<(), DbErr> {
    if name.trim().is_empty() {
        return Err(DbErr::Custom("tag name must not be empty".to_string()));
    }
    Ok(())
}

pub async fn get_tag_by_name<C>(db: &C, name: &str) -> Result<Option<tag::Model>, DbErr>
where
    C: ConnectionTrait,
{
    tag::Entity::find()
        .filter(tag::Column::Name.eq(name))
        .one(db)
        .await
}

/// Loads the tags linked to each of `bookmark_ids`, sorted by name.
/// Bookmarks without tags are absent from the map.
pub async fn get_tags_for_bookmarks<C>(
    db: &C,
    bookmark_ids: &[i32],
) -> Result<HashMap<i32, Vec<tag::Model>>, DbErr>
where
    C: ConnectionTrait,
{
    if bookmark_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let links = bookmark_tag::Entity::find()
        .filter(bookmark_tag::Column::BookmarkId.is_in(bookmark_ids.to_vec()))
        .all(db)
        .await?;
    if links.is_empty() {
        return Ok(HashMap::new());
    }

    let mut tag_ids: Vec<i32> = links.iter().map(|l| l.tag_id).collect();
    tag_ids.sort_unstable();
    tag_ids.dedup();

    let tags_by_id: HashMap<i32, tag::Model> = tag::Entity::find()
        .filter(tag::Column::Id.is_in(tag_ids))
        .order_by_asc(tag::Column::Name)
        .all(db)
        .await?
        .into_iter()
        .map(|t| (t.id, t))
        .collect();

    let mut result: HashMap<i32, Vec<tag::Model>> = HashMap::new();
    for link in links {
        if let Some(t) = tags_by_id.get(&link.tag_id) {
            result.entry(link.bookmark_id).or_default().push(t.clone());
        }
    }
    for tags in result.values_mut() {
        tags.sort_by(|a, b| a.name.cmp(&b.name));
    }
    Ok(result)
}
