//! In-memory account store.

use std::{
    collections::HashMap,
    sync::{
        Arc, RwLock,
        atomic::{AtomicBool, Ordering},
    },
};

use signup_core::{
    application::{
        ApplicationError,
        ports::{AccountCreator, AccountId},
    },
    domain::Registration,
    error::SignUpResult,
};
use tracing::{debug, instrument, warn};
use uuid::Uuid;

/// What the store keeps per account. No password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAccount {
    pub id: AccountId,
    pub display_name: String,
    pub email: String,
}

/// Thread-safe in-memory account store.
///
/// Emails are unique, compared case-insensitively; a second registration
/// for the same address is a conflict. `set_offline(true)` makes every call
/// fail with a network error.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountStore {
    inner: Arc<RwLock<HashMap<String, StoredAccount>>>,
    offline: Arc<AtomicBool>,
}

impl InMemoryAccountStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate an unreachable backend.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Get the number of accounts.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn find_by_email(&self, email: &str) -> Option<StoredAccount> {
        self.inner.read().ok()?.get(&email_key(email)).cloned()
    }
}

impl AccountCreator for InMemoryAccountStore {
    #[instrument(skip_all)]
    fn create_account(&self, registration: &Registration) -> SignUpResult<AccountId> {
        if self.offline.load(Ordering::SeqCst) {
            warn!("Account store offline");
            return Err(ApplicationError::Network {
                reason: "account store is offline".into(),
            }
            .into());
        }

        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let key = email_key(registration.email());
        if inner.contains_key(&key) {
            return Err(ApplicationError::Conflict {
                email: registration.email().to_string(),
            }
            .into());
        }

        let id = AccountId::new(Uuid::new_v4().to_string());
        inner.insert(
            key,
            StoredAccount {
                id: id.clone(),
                display_name: registration.display_name(),
                email: registration.email().to_string(),
            },
        );

        debug!(account = %id, total = inner.len(), "Account stored");
        Ok(id)
    }
}

fn email_key(email: &str) -> String {
    email.to_lowercase()
}
