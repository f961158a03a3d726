use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::user_record::StoredUserRecord};

/// Repository for the single registration record kept on the device
#[async_trait]
pub trait UserRecordRepository: Send + Sync {
    /// Overwrite the stored record
    async fn save(&self, record: &StoredUserRecord) -> Result<(), RepositoryError>;

    /// Read the stored record back.
    ///
    /// `Ok(None)` means nothing was ever saved; a value that cannot be read as
    /// a record is reported as `RepositoryError::Malformed`.
    async fn load(&self) -> Result<Option<StoredUserRecord>, RepositoryError>;
}
