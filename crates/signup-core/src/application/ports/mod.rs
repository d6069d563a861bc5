//! Application ports (traits) for external collaborators.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `signup-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Navigator`: screen transitions
//!   - `AccountCreator`: the account-creation hook run on an accepted form
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - `SignUpSession` methods, invoked by the presentation layer

pub mod output;

pub use output::{AccountCreator, AccountId, NavigationMode, Navigator, Screen};

#[cfg(test)]
pub use output::{MockAccountCreator, MockNavigator};
