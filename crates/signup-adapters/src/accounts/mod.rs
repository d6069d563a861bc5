//! Account-creation adapters.

mod memory;
mod noop;

pub use memory::{InMemoryAccountStore, StoredAccount};
pub use noop::NoopAccountCreator;
