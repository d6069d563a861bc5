//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the sign-up flow needs from the host
//! application. The `signup-adapters` crate provides implementations.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Registration;
use crate::error::SignUpResult;

/// Screens the sign-up flow can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// The registration form itself.
    SignUp,
    /// The application's home screen, shown after a successful sign-up.
    Home,
    /// The existing login screen ("already have an account").
    Login,
}

impl Screen {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SignUp => "sign_up",
            Self::Home => "home",
            Self::Login => "login",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a navigation affects the back stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationMode {
    /// Stack the new screen on top. The sign-up flow never pushes; hosts
    /// embedding other screens may.
    Push,
    /// Swap the current screen out; there is no way back to it.
    Replace,
}

/// Identifier handed back by the account-creation hook.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Port for screen transitions.
///
/// Implemented by:
/// - `signup_adapters::router::InMemoryRouter` (CLI, testing, headless hosts)
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Show `screen`. Called at most once per session.
    fn navigate_to(&self, screen: Screen, mode: NavigationMode) -> SignUpResult<()>;
}

/// Port for the account-creation hook.
///
/// Called with a validated registration before navigating home. The owning
/// system reports its own failures, typically
/// [`crate::application::ApplicationError::Network`] or
/// [`crate::application::ApplicationError::Conflict`].
///
/// Implemented by:
/// - `signup_adapters::accounts::NoopAccountCreator` (placeholder)
/// - `signup_adapters::accounts::InMemoryAccountStore` (testing, demos)
#[cfg_attr(test, mockall::automock)]
pub trait AccountCreator: Send + Sync {
    fn create_account(&self, registration: &Registration) -> SignUpResult<AccountId>;
}
