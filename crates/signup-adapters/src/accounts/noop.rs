//! Placeholder account-creation hook.

use signup_core::{
    application::ports::{AccountCreator, AccountId},
    domain::Registration,
    error::SignUpResult,
};
use tracing::debug;
use uuid::Uuid;

/// Accepts every registration without contacting anything.
///
/// Stands in until a real account service is wired up; submission then
/// only navigates locally.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAccountCreator;

impl NoopAccountCreator {
    pub fn new() -> Self {
        Self
    }
}

impl AccountCreator for NoopAccountCreator {
    fn create_account(&self, _registration: &Registration) -> SignUpResult<AccountId> {
        let id = AccountId::new(Uuid::new_v4().to_string());
        debug!(account = %id, "Account creation skipped (no backend)");
        Ok(id)
    }
}
