//! Navigation adapters.

mod memory;

pub use memory::{InMemoryRouter, Navigation};
