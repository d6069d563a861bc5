// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// These are misuse errors (bad field names, bad policy). A field that fails
/// its rules is *not* an error at this level: it is reported through
/// [`crate::domain::ValidationResult`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown form field: '{name}'")]
    UnknownField { name: String },

    #[error("Invalid password policy: {reason}")]
    InvalidPolicy { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownField { name } => vec![
                format!("'{}' is not a sign-up field", name),
                "Known fields: first_name, last_name, email, password, confirm_password".into(),
            ],
            Self::InvalidPolicy { reason } => vec![
                format!("Policy rejected: {}", reason),
                "Check the [policy] section of your configuration".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownField { .. } => ErrorCategory::NotFound,
            Self::InvalidPolicy { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
}
