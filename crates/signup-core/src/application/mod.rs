//! Application layer for the sign-up flow.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`SignUpSession`)
//! - **Ports**: Interface definitions (traits) for external collaborators
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{SessionState, SignUpSession};

// Re-export port traits (for adapter implementation)
pub use ports::{AccountCreator, AccountId, NavigationMode, Navigator, Screen};

pub use error::ApplicationError;
