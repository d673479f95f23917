use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookmarks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub url: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    // Set once from the authenticated caller, never from request input.
    #[sea_orm(indexed)]
    pub owner_id: i32,
    pub created_at: ChronoDateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Owner,
    #[sea_orm(has_many = "super::bookmark_tag::Entity")]
    BookmarkTags,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::bookmark_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookmarkTags.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::bookmark_tag::Relation::Tag.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::bookmark_tag::Relation::Bookmark.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
