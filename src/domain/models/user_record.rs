use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::{error::ValidationError, models::registration_form::RegistrationForm};

/// Positive number entered as text
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PersonalCode(f64);

impl PersonalCode {
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::InvalidPersonalCode);
        }
        Ok(Self(value))
    }
}

/// Decimal (with optional fraction and exponent) or `0x`/`0o`/`0b` integer
fn parse_number(text: &str) -> Option<f64> {
    let lower = text.to_ascii_lowercase();
    let radix = match lower.get(..2) {
        Some("0x") => 16,
        Some("0o") => 8,
        Some("0b") => 2,
        _ => 10,
    };

    if radix != 10 {
        let digits = &lower[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .try_fold(0.0_f64, |acc, d| Some(acc * f64::from(radix) + f64::from(d)));
    }

    // f64 parsing also takes "inf" and "nan" spellings
    if lower.chars().any(|c| c.is_ascii_alphabetic() && c != 'e') {
        return None;
    }
    lower.parse::<f64>().ok()
}

impl FromStr for PersonalCode {
    type Err = ValidationError;

    // Surrounding whitespace is ignored.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let value = parse_number(raw.trim()).ok_or(ValidationError::InvalidPersonalCode)?;
        Self::new(value)
    }
}

impl fmt::Display for PersonalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registration that passed every validation rule.
///
/// The password is checked but not carried.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    personal_code: PersonalCode,
    full_name: String,
    email: String,
}

impl UserRecord {
    pub(crate) fn new(personal_code: PersonalCode, full_name: String, email: String) -> Self {
        Self {
            personal_code,
            full_name,
            email,
        }
    }

    pub fn personal_code(&self) -> PersonalCode {
        self.personal_code
    }
    pub fn full_name(&self) -> &str {
        &self.full_name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// JSON shape kept under the `@userData` key.
///
/// Every field defaults to an empty string so a record missing some keys
/// still loads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredUserRecord {
    pub personal_code: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl From<&RegistrationForm> for StoredUserRecord {
    fn from(form: &RegistrationForm) -> Self {
        Self {
            personal_code: form.personal_code.clone(),
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            password: form.password.clone(),
            confirm_password: form.confirm_password.clone(),
        }
    }
}
