use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};
use tracing::info;

use crate::db::entities::{bookmark, bookmark_tag, tag, user};

/// Creates every table (and declared index) that does not exist yet.
///
/// Tables are created parents first so foreign keys resolve: users, tags,
/// bookmarks, then the bookmark/tag join table.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table_for(db, user::Entity).await?;
    create_table_for(db, tag::Entity).await?;
    create_table_for(db, bookmark::Entity).await?;
    create_table_for(db, bookmark_tag::Entity).await?;
    info!("Database schema is ready.");
    Ok(())
}

async fn create_table_for<E>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr>
where
    E: EntityTrait + Copy,
{
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut table = schema.create_table_from_entity(entity);
    table.if_not_exists();
    db.execute(backend.build(&table)).await?;

    for mut index in schema.create_index_from_entity(entity) {
        index.if_not_exists();
        db.execute(backend.build(&index)).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::memory_connection;

    #[tokio::test]
    async fn test_create_tables_is_idempotent() {
        let db = memory_connection().await;
        create_tables(&db).await.unwrap();
        create_tables(&db).await.unwrap();

        let users = user::Entity::find().all(&db).await.unwrap();
        assert!(users.is_empty());
    }
}
