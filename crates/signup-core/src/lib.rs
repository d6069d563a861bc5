//! Sign-up Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the account
//! sign-up form, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        signup-cli (presentation)        │
//! │     (Drives SignUpSession, renders)     │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (SignUpSession)             │
//! │     Submit: validate → create → go      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Navigator, Accounts)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    signup-adapters (Infrastructure)     │
//! │  (InMemoryRouter, InMemoryAccountStore) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (Field, FormValidator, PasswordPolicy)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use signup_core::domain::{Field, FormValidator, SignUpForm, SubmitOutcome};
//!
//! let form = SignUpForm::new()
//!     .with(Field::FirstName, "Marie")
//!     .with(Field::LastName, "Dupont")
//!     .with(Field::Email, "marie@example.com")
//!     .with(Field::Password, "Abcdef1")
//!     .with(Field::ConfirmPassword, "Abcdef1");
//!
//! let outcome = FormValidator::default().submit(&form);
//! assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        AccountCreator, AccountId, NavigationMode, Navigator, Screen, SessionState,
        SignUpSession,
    };
    pub use crate::domain::{
        Field, FieldError, FormReport, FormValidator, PasswordPolicy, Registration,
        SignUpForm, SubmitOutcome, ValidationResult, Violation,
    };
    pub use crate::error::{SignUpError, SignUpResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
