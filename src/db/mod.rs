pub mod entities;
pub mod schema;
pub mod services;

#[cfg(test)]
pub(crate) mod testing {
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};
    use std::path::Path;

    /// In-memory SQLite pinned to a single connection; each new connection
    /// would otherwise see its own empty database.
    pub async fn memory_connection() -> DatabaseConnection {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        Database::connect(opt)
            .await
            .expect("connect to in-memory sqlite")
    }

    /// Fresh in-memory database with the full schema applied.
    pub async fn memory_db() -> DatabaseConnection {
        let db = memory_connection().await;
        super::schema::create_tables(&db)
            .await
            .expect("create schema");
        db
    }

    /// File-backed SQLite under `dir` with a real connection pool, for tests
    /// that need concurrent writers.
    pub async fn file_db(dir: &Path, max_connections: u32) -> DatabaseConnection {
        let url = format!("sqlite://{}?mode=rwc", dir.join("bookmarks.db").display());
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(max_connections).sqlx_logging(false);
        let db = Database::connect(opt)
            .await
            .expect("connect to file-backed sqlite");
        super::schema::create_tables(&db)
            .await
            .expect("create schema");
        db
    }
}
