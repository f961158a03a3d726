use tracing::info;

use crate::domain::{
    error::DomainError, models::registration_form::RegistrationForm,
    repositories::user_record_repository::UserRecordRepository,
};

pub struct LoadUserRecordUsecase<R: UserRecordRepository> {
    repository: R,
}

impl<R: UserRecordRepository> LoadUserRecordUsecase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Read the stored record back as form contents.
    ///
    /// No validation rule is applied to what was stored.
    pub async fn load(&self) -> Result<RegistrationForm, DomainError> {
        let stored = self
            .repository
            .load()
            .await?
            .ok_or(DomainError::NoDataFound)?;

        info!("Loaded user record");
        Ok(RegistrationForm::from(stored))
    }
}
