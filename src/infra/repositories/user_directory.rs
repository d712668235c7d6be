//! User directory: the static demo account list.

use std::sync::Arc;

use async_trait::async_trait;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::config::STORAGE_KEY_USERS;
use crate::domain::{seed_users, Role, User};
use crate::errors::AppResult;
use crate::infra::store::{read_json, StorageBackend};

/// Read-only access to the seeded account directory.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// All accounts
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Exact-match lookup by email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Accounts holding a given role
    async fn by_role(&self, role: Role) -> AppResult<Vec<User>>;
}

/// Directory backed by the key-value store, falling back to the built-in
/// seed set when the store was never initialized.
pub struct SeededDirectory {
    store: Arc<dyn StorageBackend>,
}

impl SeededDirectory {
    pub fn new(store: Arc<dyn StorageBackend>) -> Self {
        Self { store }
    }

    fn load(&self) -> AppResult<Vec<User>> {
        Ok(read_json(self.store.as_ref(), STORAGE_KEY_USERS)?.unwrap_or_else(seed_users))
    }
}

#[async_trait]
impl UserDirectory for SeededDirectory {
    async fn list(&self) -> AppResult<Vec<User>> {
        self.load()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.load()?.into_iter().find(|u| u.email == email))
    }

    async fn by_role(&self, role: Role) -> AppResult<Vec<User>> {
        Ok(self.load()?.into_iter().filter(|u| u.role == role).collect())
    }
}
