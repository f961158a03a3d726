use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::{
    error::RepositoryError,
    models::user_record::StoredUserRecord,
    repositories::{
        key_value_storage::KeyValueStorage, user_record_repository::UserRecordRepository,
    },
};

/// Fixed key the registration record lives under
pub const USER_DATA_KEY: &str = "@userData";

/// Keeps the record as one JSON document under `USER_DATA_KEY`
#[derive(Clone)]
pub struct JsonUserRecordRepository {
    storage: Arc<dyn KeyValueStorage>,
}

impl JsonUserRecordRepository {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl UserRecordRepository for JsonUserRecordRepository {
    async fn save(&self, record: &StoredUserRecord) -> Result<(), RepositoryError> {
        let json = serde_json::to_string(record)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        self.storage.set_item(USER_DATA_KEY, &json).await
    }

    async fn load(&self) -> Result<Option<StoredUserRecord>, RepositoryError> {
        let Some(raw) = self.storage.get_item(USER_DATA_KEY).await? else {
            debug!(key = USER_DATA_KEY, "No stored value");
            return Ok(None);
        };
        debug!(key = USER_DATA_KEY, bytes = raw.len(), "Read stored value");

        let record = serde_json::from_str::<StoredUserRecord>(&raw).map_err(|e| {
            warn!(key = USER_DATA_KEY, error = %e, "Stored value is not a user record");
            RepositoryError::Malformed(e.to_string())
        })?;

        Ok(Some(record))
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;
    use crate::infrastructure::in_memory_key_value_storage::InMemoryKeyValueStorage;

    // storage whose writes always fail
    struct BrokenStorage;

    #[async_trait]
    impl KeyValueStorage for BrokenStorage {
        async fn get_item(&self, _key: &str) -> Result<Option<String>, RepositoryError> {
            Err(RepositoryError::Storage("disk unavailable".to_string()))
        }

        async fn set_item(&self, _key: &str, _value: &str) -> Result<(), RepositoryError> {
            Err(RepositoryError::Storage("disk full".to_string()))
        }
    }

    #[fixture]
    fn record() -> StoredUserRecord {
        StoredUserRecord {
            personal_code: "42".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "Abcde1".to_string(),
            confirm_password: "Abcde1".to_string(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_save_writes_json_under_fixed_key(record: StoredUserRecord) {
        let storage = InMemoryKeyValueStorage::new();
        let repository = JsonUserRecordRepository::new(Arc::new(storage.clone()));

        repository.save(&record).await.unwrap();

        let raw = storage.get_item("@userData").await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["personalCode"], "42");
        assert_eq!(value["fullName"], "Ada Lovelace");
        assert_eq!(value["email"], "ada@example.com");
        assert_eq!(value["password"], "Abcde1");
        assert_eq!(value["confirmPassword"], "Abcde1");
    }

    #[rstest]
    #[tokio::test]
    async fn test_save_then_load(record: StoredUserRecord) {
        let repository = JsonUserRecordRepository::new(Arc::new(InMemoryKeyValueStorage::new()));
        repository.save(&record).await.unwrap();
        assert_eq!(repository.load().await.unwrap(), Some(record));
    }

    #[tokio::test]
    async fn test_load_absent_returns_none() {
        let repository = JsonUserRecordRepository::new(Arc::new(InMemoryKeyValueStorage::new()));
        assert_eq!(repository.load().await.unwrap(), None);
    }

    #[rstest]
    #[case("not json")]
    #[case("null")]
    #[case("[1, 2, 3]")]
    #[case(r#"{"personalCode": 42}"#)]
    #[tokio::test]
    async fn test_load_malformed_negative(#[case] raw: &str) {
        let storage = InMemoryKeyValueStorage::new();
        storage.set_item(USER_DATA_KEY, raw).await.unwrap();
        let repository = JsonUserRecordRepository::new(Arc::new(storage));

        let result = repository.load().await;
        assert!(matches!(result, Err(RepositoryError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_load_partial_object_fills_empty_fields() {
        let storage = InMemoryKeyValueStorage::new();
        storage
            .set_item(USER_DATA_KEY, r#"{"fullName":"Ada","extra":true}"#)
            .await
            .unwrap();
        let repository = JsonUserRecordRepository::new(Arc::new(storage));

        let record = repository.load().await.unwrap().unwrap();
        assert_eq!(record.full_name, "Ada");
        assert_eq!(record.email, "");
    }

    #[rstest]
    #[tokio::test]
    async fn test_storage_failure_propagates(record: StoredUserRecord) {
        let repository = JsonUserRecordRepository::new(Arc::new(BrokenStorage));
        assert!(matches!(
            repository.save(&record).await,
            Err(RepositoryError::Storage(_))
        ));
        assert!(matches!(
            repository.load().await,
            Err(RepositoryError::Storage(_))
        ));
    }
}
