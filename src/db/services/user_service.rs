use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set, SqlErr,
};

use crate::db::entities::user;

// --- User Service Functions ---

/// Inserts a new user row. The unique index on `username` is the only
/// duplicate check; callers detect it with [`is_unique_violation`].
pub async fn create_user<C>(db: &C, username: &str, password_hash: &str) -> Result<user::Model, DbErr>
where
    C: ConnectionTrait,
{
    let new_user = user::ActiveModel {
        username: Set(username.to_owned()),
        password_hash: Set(password_hash.to_owned()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    new_user.insert(db).await
}

/// Retrieves a user by their username.
pub async fn get_user_by_username<C>(db: &C, username: &str) -> Result<Option<user::Model>, DbErr>
where
    C: ConnectionTrait,
{
    user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await
}

/// Retrieves a user by their ID.
pub async fn get_user_by_id<C>(db: &C, user_id: i32) -> Result<Option<user::Model>, DbErr>
where
    C: ConnectionTrait,
{
    user::Entity::find_by_id(user_id).one(db).await
}

pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
