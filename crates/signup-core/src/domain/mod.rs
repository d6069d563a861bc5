// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for the sign-up form.
//!
//! Pure business logic: the five fields, their rules, and the validator
//! that turns a filled form into a [`SubmitOutcome`]. Navigation and account
//! creation are reached only through ports in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: validation is synchronous
//! - **No I/O**: no filesystem, network, or navigation calls
//! - **Pure rules**: same input, same result, no hidden state
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod field;
pub mod policy;
pub mod violation;

mod validation;

// Re-exports for convenience
pub use entities::{Registration, SignUpForm};
pub use error::{DomainError, ErrorCategory};
pub use field::Field;
pub use policy::{DEFAULT_MIN_PASSWORD_LENGTH, PasswordPolicy};
pub use validation::{FormReport, FormValidator, SubmitOutcome};
pub use violation::{FieldError, ValidationResult, Violation};
