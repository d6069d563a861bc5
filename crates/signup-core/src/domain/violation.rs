//! Rule violations and per-field validation results.

use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

use crate::domain::field::Field;

/// The fixed set of rules a field value can break.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Violation {
    #[error("is required")]
    Required,

    #[error("must be at least {min} characters long")]
    TooShort { min: usize },

    #[error("needs an uppercase letter")]
    MissingUppercase,

    #[error("needs a lowercase letter")]
    MissingLowercase,

    #[error("needs a digit")]
    MissingDigit,

    #[error("is not a valid email address")]
    InvalidFormat,

    #[error("does not match the password")]
    Mismatch,
}

impl Violation {
    /// Stable rule code for machine-readable output.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::TooShort { .. } => "too_short",
            Self::MissingUppercase => "missing_uppercase",
            Self::MissingLowercase => "missing_lowercase",
            Self::MissingDigit => "missing_digit",
            Self::InvalidFormat => "invalid_format",
            Self::Mismatch => "mismatch",
        }
    }
}

/// A rule violation attached to the field that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldError {
    pub field: Field,
    pub violation: Violation,
}

impl FieldError {
    pub const fn new(field: Field, violation: Violation) -> Self {
        Self { field, violation }
    }

    /// The message shown under the input.
    pub fn message(&self) -> String {
        use Field::*;
        use Violation::*;

        match (self.field, self.violation) {
            (FirstName, Required) => "Please enter your first name".into(),
            (LastName, Required) => "Please enter your last name".into(),
            (Email, Required) => "Please enter your email address".into(),
            (Email, InvalidFormat) => "Invalid email address".into(),
            (Password, Required) => "Please enter a password".into(),
            (Password, TooShort { min }) => {
                format!("Password must contain at least {min} characters")
            }
            (Password, MissingUppercase) => {
                "Password must contain at least one uppercase letter".into()
            }
            (Password, MissingLowercase) => {
                "Password must contain at least one lowercase letter".into()
            }
            (Password, MissingDigit) => "Password must contain at least one digit".into(),
            (ConfirmPassword, Required) => "Please confirm your password".into(),
            (ConfirmPassword, Mismatch) => "Passwords do not match".into(),
            (field, violation) => format!("{} {}", field.label(), violation),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message())
    }
}

impl std::error::Error for FieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.violation)
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldError", 3)?;
        state.serialize_field("field", &self.field)?;
        state.serialize_field("rule", self.violation.code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// Outcome of validating one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationResult {
    Valid,
    Invalid(FieldError),
}

impl ValidationResult {
    pub const fn invalid(field: Field, violation: Violation) -> Self {
        Self::Invalid(FieldError::new(field, violation))
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub const fn error(&self) -> Option<&FieldError> {
        match self {
            Self::Valid => None,
            Self::Invalid(e) => Some(e),
        }
    }

    pub fn violation(&self) -> Option<Violation> {
        self.error().map(|e| e.violation)
    }

    pub fn message(&self) -> Option<String> {
        self.error().map(FieldError::message)
    }

    pub fn into_result(self) -> Result<(), FieldError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(e) => Err(e),
        }
    }
}
