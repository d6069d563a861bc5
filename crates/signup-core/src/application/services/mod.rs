//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "submit the sign-up form".

pub mod signup_session;

pub use signup_session::{SessionState, SignUpSession};
