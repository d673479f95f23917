//! SeaORM entities for the bookmark store.
//!
//! `bookmark_tag` is the join table behind the many-to-many link between
//! bookmarks and the global tag set.

pub mod bookmark;
pub mod bookmark_tag;
pub mod tag;
pub mod user;

pub mod prelude {
    pub use super::user::Entity as User;
    pub use super::user::Model as UserModel;
    pub use super::user::ActiveModel as UserActiveModel;
    pub use super::user::Column as UserColumn;

    pub use super::tag::Entity as Tag;
    pub use super::tag::Model as TagModel;
    pub use super::tag::ActiveModel as TagActiveModel;
    pub use super::tag::Column as TagColumn;

    pub use super::bookmark::Entity as Bookmark;
    pub use super::bookmark::Model as BookmarkModel;
    pub use super::bookmark::ActiveModel as BookmarkActiveModel;
    pub use super::bookmark::Column as BookmarkColumn;

    pub use super::bookmark_tag::Entity as BookmarkTag;
    pub use super::bookmark_tag::Model as BookmarkTagModel;
    pub use super::bookmark_tag::ActiveModel as BookmarkTagActiveModel;
    pub use super::bookmark_tag::Column as BookmarkTagColumn;
}
