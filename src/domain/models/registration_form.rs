use crate::domain::models::user_record::StoredUserRecord;

/// Editable state of the registration screen: five raw text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub personal_code: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    #[cfg(test)]
    pub fn new(
        personal_code: impl Into<String>,
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            personal_code: personal_code.into(),
            full_name: full_name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Reset every field to an empty string
    pub fn clear(&mut self) {
        self.personal_code.clear();
        self.full_name.clear();
        self.email.clear();
        self.password.clear();
        self.confirm_password.clear();
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.personal_code.is_empty()
            && self.full_name.is_empty()
            && self.email.is_empty()
            && self.password.is_empty()
            && self.confirm_password.is_empty()
    }
}

impl From<StoredUserRecord> for RegistrationForm {
    fn from(stored: StoredUserRecord) -> Self {
        Self {
            personal_code: stored.personal_code,
            full_name: stored.full_name,
            email: stored.email,
            password: stored.password,
            confirm_password: stored.confirm_password,
        }
    }
}
