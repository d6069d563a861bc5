//! Infrastructure adapters for the sign-up core.
//!
//! This crate implements the ports defined in `signup-core::application::ports`.

pub mod accounts;
pub mod router;

// Re-export commonly used adapters
pub use accounts::{InMemoryAccountStore, NoopAccountCreator, StoredAccount};
pub use router::{InMemoryRouter, Navigation};
