use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{error::RepositoryError, repositories::key_value_storage::KeyValueStorage};

/// Process-local storage; contents are lost on exit
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryKeyValueStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryKeyValueStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
