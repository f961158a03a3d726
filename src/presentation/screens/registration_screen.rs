use tracing::warn;

use crate::{
    domain::{
        error::DomainError, models::registration_form::RegistrationForm,
        repositories::user_record_repository::UserRecordRepository,
    },
    usecase::{
        load_user_record_usecase::LoadUserRecordUsecase,
        save_user_record_usecase::SaveUserRecordUsecase,
    },
};

pub const SAVE_SUCCESS_MESSAGE: &str = "Data saved successfully!";

/// Blocking message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub message: String,
}

impl Alert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The registration screen: owns the form state and wires the
/// Save / Load / Clear actions to the usecases.
pub struct RegistrationScreen<S: UserRecordRepository, L: UserRecordRepository> {
    form: RegistrationForm,
    save_service: SaveUserRecordUsecase<S>,
    load_service: LoadUserRecordUsecase<L>,
}

impl<S: UserRecordRepository, L: UserRecordRepository> RegistrationScreen<S, L> {
    pub fn new(
        save_service: SaveUserRecordUsecase<S>,
        load_service: LoadUserRecordUsecase<L>,
    ) -> Self {
        Self {
            form: RegistrationForm::default(),
            save_service,
            load_service,
        }
    }

    pub fn form(&self) -> &RegistrationForm {
        &self.form
    }

    // field inputs

    pub fn set_personal_code(&mut self, value: impl Into<String>) {
        self.form.personal_code = value.into();
    }
    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.form.full_name = value.into();
    }
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
    }
    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.password = value.into();
    }
    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.form.confirm_password = value.into();
    }

    // actions

    /// Save action. Validation failures come back as an alert with the
    /// field values kept; storage failures are returned as errors.
    pub async fn save(&self) -> Result<Alert, DomainError> {
        match self.save_service.save(&self.form).await {
            Ok(_) => Ok(Alert::new(SAVE_SUCCESS_MESSAGE)),
            Err(DomainError::Validation(e)) => Ok(Alert::new(e.to_string())),
            Err(e) => Err(e),
        }
    }

    /// Load action. Replaces every field on success; on a miss the fields
    /// stay as they are and an alert is returned.
    pub async fn load(&mut self) -> Result<Option<Alert>, DomainError> {
        match self.load_service.load().await {
            Ok(form) => {
                self.form = form;
                Ok(None)
            }
            Err(DomainError::NoDataFound) => {
                Ok(Some(Alert::new(DomainError::NoDataFound.to_string())))
            }
            Err(e) => {
                warn!(error = %e, "Load failed, keeping current fields");
                Err(e)
            }
        }
    }

    /// Clear action
    pub fn clear(&mut self) {
        self.form.clear();
    }
}
