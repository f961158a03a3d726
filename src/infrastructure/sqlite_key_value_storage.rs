use async_trait::async_trait;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement,
};
use tracing::info;

use crate::{
    domain::{error::RepositoryError, repositories::key_value_storage::KeyValueStorage},
    infrastructure::storage_config::StorageConfig,
};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS key_value_store (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
)";

#[derive(Clone)]
pub struct SqliteKeyValueStorage {
    db: DatabaseConnection,
}

impl SqliteKeyValueStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Open the database from config and make sure the table exists
    pub async fn connect(config: &StorageConfig) -> Result<Self, RepositoryError> {
        let mut opt = ConnectOptions::new(config.database_url.clone());
        opt.max_connections(config.max_connections)
            .min_connections(1)
            .sqlx_logging(false);

        let db = Database::connect(opt)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        let storage = Self::new(db);
        storage.init().await?;
        info!(url = %config.database_url, "Opened key-value storage");
        Ok(storage)
    }

    pub async fn init(&self) -> Result<(), RepositoryError> {
        self.db
            .execute_unprepared(CREATE_TABLE_SQL)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorage for SqliteKeyValueStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "SELECT value FROM key_value_store WHERE key = ?",
            [key.into()],
        );

        let row = self
            .db
            .query_one(stmt)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        match row {
            Some(row) => {
                let value = row
                    .try_get::<String>("", "value")
                    .map_err(|e| RepositoryError::Storage(e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        let stmt = Statement::from_sql_and_values(
            DbBackend::Sqlite,
            "INSERT INTO key_value_store (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key.into(), value.into()],
        );

        self.db
            .execute(stmt)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(())
    }
}
