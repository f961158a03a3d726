use tracing::{debug, info};

use crate::domain::{
    error::DomainError,
    models::{
        registration_form::RegistrationForm,
        user_record::{StoredUserRecord, UserRecord},
    },
    repositories::user_record_repository::UserRecordRepository,
    services::validation_service::validate_form,
};

pub struct SaveUserRecordUsecase<R: UserRecordRepository> {
    repository: R,
}

impl<R: UserRecordRepository> SaveUserRecordUsecase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Validate the form and, only if every rule passes, overwrite the stored record.
    ///
    /// The five fields are persisted exactly as entered, confirmation included.
    pub async fn save(&self, form: &RegistrationForm) -> Result<UserRecord, DomainError> {
        let record = validate_form(form)?;

        self.repository.save(&StoredUserRecord::from(form)).await?;

        info!(personal_code = %record.personal_code(), "Saved user record");
        debug!(full_name = record.full_name(), email = record.email(), "Saved record details");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use rstest::*;

    use super::*;
    use crate::domain::error::{RepositoryError, ValidationError};

    // mock repository that remembers what was written
    #[derive(Clone, Default)]
    struct MockUserRecordRepository {
        stored: Arc<Mutex<Option<StoredUserRecord>>>,
        fail_writes: bool,
    }

    #[async_trait]
    impl UserRecordRepository for MockUserRecordRepository {
        async fn save(&self, record: &StoredUserRecord) -> Result<(), RepositoryError> {
            if self.fail_writes {
                return Err(RepositoryError::Storage("write failed".to_string()));
            }
            *self.stored.lock().unwrap() = Some(record.clone());
            Ok(())
        }

        async fn load(&self) -> Result<Option<StoredUserRecord>, RepositoryError> {
            Ok(self.stored.lock().unwrap().clone())
        }
    }

    #[fixture]
    fn valid_form() -> RegistrationForm {
        RegistrationForm::new("42", "Ada Lovelace", "ada@example.com", "Abcde1", "Abcde1")
    }

    #[rstest]
    #[tokio::test]
    async fn test_save_positive(valid_form: RegistrationForm) {
        let repository = MockUserRecordRepository::default();
        let usecase = SaveUserRecordUsecase::new(repository.clone());

        let record = usecase.save(&valid_form).await.unwrap();

        assert_eq!(record.personal_code().to_string(), "42");
        let stored = repository.stored.lock().unwrap().clone().unwrap();
        assert_eq!(stored, StoredUserRecord::from(&valid_form));
    }

    #[rstest]
    #[tokio::test]
    async fn test_save_keeps_raw_personal_code(mut valid_form: RegistrationForm) {
        valid_form.personal_code = "007".to_string();
        let repository = MockUserRecordRepository::default();
        let usecase = SaveUserRecordUsecase::new(repository.clone());

        usecase.save(&valid_form).await.unwrap();

        let stored = repository.stored.lock().unwrap().clone().unwrap();
        assert_eq!(stored.personal_code, "007");
    }

    #[rstest]
    #[tokio::test]
    async fn test_invalid_form_is_not_persisted_negative(mut valid_form: RegistrationForm) {
        valid_form.confirm_password = "Different1".to_string();
        let repository = MockUserRecordRepository::default();
        let usecase = SaveUserRecordUsecase::new(repository.clone());

        let result = usecase.save(&valid_form).await;

        assert!(matches!(
            result,
            Err(DomainError::Validation(ValidationError::PasswordMismatch))
        ));
        assert!(repository.stored.lock().unwrap().is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn test_rejected_save_keeps_previous_record(valid_form: RegistrationForm) {
        let repository = MockUserRecordRepository::default();
        let usecase = SaveUserRecordUsecase::new(repository.clone());
        usecase.save(&valid_form).await.unwrap();

        let mut invalid = valid_form.clone();
        invalid.full_name = "   ".to_string();
        assert!(usecase.save(&invalid).await.is_err());

        let stored = repository.stored.lock().unwrap().clone().unwrap();
        assert_eq!(stored.full_name, "Ada Lovelace");
    }

    #[rstest]
    #[tokio::test]
    async fn test_storage_failure_negative(valid_form: RegistrationForm) {
        let repository = MockUserRecordRepository {
            fail_writes: true,
            ..Default::default()
        };
        let usecase = SaveUserRecordUsecase::new(repository);

        let result = usecase.save(&valid_form).await;

        assert!(matches!(
            result,
            Err(DomainError::Repository(RepositoryError::Storage(_)))
        ));
    }
}
