//! Unified error handling for the sign-up core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for sign-up core operations.
///
/// A rejected form is not an error; see [`crate::domain::SubmitOutcome`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignUpError {
    /// Errors from the domain layer (misuse of fields or policy).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl SignUpError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Application(e) if e.is_retryable())
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Network,
    Internal,
}

/// Convenient result type alias.
pub type SignUpResult<T> = Result<T, SignUpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_flow_through_wrapper() {
        let conflict: SignUpError = ApplicationError::Conflict {
            email: "a@b.c".into(),
        }
        .into();
        assert_eq!(conflict.category(), ErrorCategory::Conflict);

        let unknown: SignUpError = DomainError::UnknownField {
            name: "nick".into(),
        }
        .into();
        assert_eq!(unknown.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn transport_failures_are_retryable() {
        let net: SignUpError = ApplicationError::Network {
            reason: "timeout".into(),
        }
        .into();
        assert!(net.is_retryable());

        let closed: SignUpError = ApplicationError::SessionClosed.into();
        assert!(!closed.is_retryable());
    }

    #[test]
    fn locked_form_is_a_user_error_that_suggests_resubmitting() {
        let err: SignUpError = ApplicationError::FormLocked {
            account: crate::application::AccountId::new("acc-1"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.is_retryable());
        assert!(err.suggestions().iter().any(|s| s.contains("Submit again")));
    }

    #[test]
    fn conflict_suggests_login() {
        let err: SignUpError = ApplicationError::Conflict {
            email: "a@b.c".into(),
        }
        .into();
        assert!(err.suggestions().iter().any(|s| s.contains("login")));
    }
}
