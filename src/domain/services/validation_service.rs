//! Field rules for the registration form

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::{
    error::ValidationError,
    models::{
        registration_form::RegistrationForm,
        user_record::{PersonalCode, UserRecord},
    },
};

const MIN_PASSWORD_LENGTH: usize = 5;

/// Check the form rule by rule and stop at the first failure.
///
/// Order: personal code, full name, email, password confirmation,
/// password digit, password uppercase letter, password length.
pub fn validate_form(form: &RegistrationForm) -> Result<UserRecord, ValidationError> {
    let personal_code: PersonalCode = form.personal_code.parse()?;
    validate_full_name(&form.full_name)?;
    validate_email(&form.email)?;
    validate_password(&form.password, &form.confirm_password)?;

    Ok(UserRecord::new(
        personal_code,
        form.full_name.clone(),
        form.email.clone(),
    ))
}

pub fn validate_full_name(full_name: &str) -> Result<(), ValidationError> {
    if full_name.trim().is_empty() {
        return Err(ValidationError::MissingFullName);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_.-]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$")
            .expect("Failed to compile email regex")
    });

    if !regex.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_password(password: &str, confirm_password: &str) -> Result<(), ValidationError> {
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordMissingDigit);
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordMissingUppercase);
    }

    // counted in UTF-16 code units, so a surrogate pair counts twice
    if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }

    Ok(())
}
