//! Application layer errors.
//!
//! These errors represent failures in orchestration, not rule violations.
//! An invalid form is a normal [`crate::domain::SubmitOutcome::Rejected`].

use thiserror::Error;

use crate::application::ports::{AccountId, Screen};
use crate::error::ErrorCategory;

/// Errors that occur while driving a sign-up session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The session already navigated away; its fields are gone.
    #[error("Sign-up session is closed")]
    SessionClosed,

    /// The navigator could not show the requested screen.
    #[error("Navigation to {screen} failed: {reason}")]
    NavigationFailed { screen: Screen, reason: String },

    /// The account was created but the session has not reached home yet.
    #[error("Account {account} was already created from this form")]
    FormLocked { account: AccountId },

    /// The account service could not be reached.
    #[error("Network error: {reason}")]
    Network { reason: String },

    /// An account already exists for this email.
    #[error("An account already exists for {email}")]
    Conflict { email: String },

    /// Adapter state access failed (lock poisoned, etc.).
    #[error("Adapter store error")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SessionClosed => vec![
                "This form was already submitted or left".into(),
                "Open a new sign-up session to start over".into(),
            ],
            Self::Network { .. } => vec![
                "The account service is unreachable".into(),
                "Check your connection and try again".into(),
            ],
            Self::Conflict { email } => vec![
                format!("'{}' is already registered", email),
                "Try: signup login".into(),
                "Or register with a different email address".into(),
            ],
            Self::FormLocked { .. } => vec![
                "The form can no longer be edited".into(),
                "Submit again to finish signing up".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SessionClosed | Self::FormLocked { .. } => ErrorCategory::Validation,
            Self::Conflict { .. } => ErrorCategory::Conflict,
            Self::Network { .. } => ErrorCategory::Network,
            Self::NavigationFailed { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }

    /// Only transport failures are worth retrying as-is.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::StoreLockError)
    }
}
