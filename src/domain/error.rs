use thiserror::Error;

/// Rule violations found while validating the registration form.
/// The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Personal code must be a number greater than 0.")]
    InvalidPersonalCode,

    #[error("Name is required.")]
    MissingFullName,

    #[error("Please enter a valid email.")]
    InvalidEmail,

    #[error("Password and confirmation must match.")]
    PasswordMismatch,

    #[error("Password must contain at least one number.")]
    PasswordMissingDigit,

    #[error("Password must contain at least one uppercase letter.")]
    PasswordMissingUppercase,

    #[error("Password must be at least 5 characters long.")]
    PasswordTooShort,
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("No data found")]
    NoDataFound,
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Stored record is malformed: {0}")]
    Malformed(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
