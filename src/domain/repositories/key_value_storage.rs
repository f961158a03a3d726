use async_trait::async_trait;

use crate::domain::error::RepositoryError;

/// On-device key-value storage holding string values
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Returns `None` when nothing is stored under `key`
    async fn get_item(&self, key: &str) -> Result<Option<String>, RepositoryError>;

    /// Stores `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
}
