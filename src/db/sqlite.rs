use crate::db::models::Link;
use crate::db::schema::SQLITE_INIT;
use crate::error::FridgeError;
use futures::TryStreamExt;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

/// Open (creating if absent) the SQLite database behind `database_url`.
pub async fn connect(database_url: &str) -> Result<SqlitePool, FridgeError> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(options).await?;
    Ok(pool)
}

/// Open the database and make sure the `links` table exists.
pub async fn initialize(database_url: &str) -> Result<LinksStorage, FridgeError> {
    let pool = connect(database_url).await?;
    let storage = LinksStorage::new(pool);
    storage.init_schema().await?;
    info!(database_url = %database_url, "link storage initialized");
    Ok(storage)
}

#[derive(Clone)]
pub struct LinksStorage {
    pool: SqlitePool,
}

impl LinksStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL. Safe to run on every startup.
    pub async fn init_schema(&self) -> Result<(), FridgeError> {
        sqlx::query(SQLITE_INIT).execute(&self.pool).await?;
        Ok(())
    }

    /// All rows in storage scan order. A single bad row fails the whole list.
    pub async fn list(&self) -> Result<Vec<Link>, FridgeError> {
        let links = sqlx::query_as::<_, Link>("SELECT id, url FROM links")
            .fetch(&self.pool)
            .try_collect::<Vec<_>>()
            .await?;
        Ok(links)
    }

    /// Insert a new row and return its assigned id. Duplicates are accepted.
    pub async fn insert(&self, url: &str) -> Result<i64, FridgeError> {
        let id = sqlx::query("INSERT INTO links (url) VALUES (?)")
            .bind(url)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();
        debug!(id, "link inserted");
        Ok(id)
    }

    /// Delete every row whose url equals `url` exactly. Returns rows affected; zero is not an error.
    pub async fn delete_by_url(&self, url: &str) -> Result<u64, FridgeError> {
        let affected = sqlx::query("DELETE FROM links WHERE url = ?")
            .bind(url)
            .execute(&self.pool)
            .await?
            .rows_affected();
        debug!(affected, "links deleted");
        Ok(affected)
    }
}
