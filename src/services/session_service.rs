//! Session service: login, current-user lookup, logout.
//!
//! A demo convenience, not a security boundary: exact-match plaintext
//! credentials, no tokens, no expiry, no lockout.

use std::sync::Arc;

use async_trait::async_trait;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::config::STORAGE_KEY_CURRENT_USER;
use crate::domain::User;
use crate::errors::{AppError, AppResult};
use crate::infra::{read_json, write_json, StorageBackend, UserDirectory};

/// Session service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionService: Send + Sync {
    /// Authenticate against the directory and persist the session
    async fn login(&self, email: &str, password: &str) -> AppResult<User>;

    /// The logged-in user, if any
    async fn current_user(&self) -> AppResult<Option<User>>;

    /// Clear the session; logging out while logged out is not an error
    async fn logout(&self) -> AppResult<()>;
}

/// Concrete session service over the user directory and the key-value store.
pub struct Session {
    directory: Arc<dyn UserDirectory>,
    store: Arc<dyn StorageBackend>,
}

impl Session {
    pub fn new(directory: Arc<dyn UserDirectory>, store: Arc<dyn StorageBackend>) -> Self {
        Self { directory, store }
    }
}

#[async_trait]
impl SessionService for Session {
    async fn login(&self, email: &str, password: &str) -> AppResult<User> {
        let user = self
            .directory
            .find_by_email(email)
            .await?
            .filter(|u| u.password == password)
            .ok_or(AppError::InvalidCredentials)?;

        write_json(self.store.as_ref(), STORAGE_KEY_CURRENT_USER, &user)?;
        tracing::info!(user = %user.id, role = %user.role, "logged in");
        Ok(user)
    }

    async fn current_user(&self) -> AppResult<Option<User>> {
        read_json(self.store.as_ref(), STORAGE_KEY_CURRENT_USER)
    }

    async fn logout(&self) -> AppResult<()> {
        self.store.remove(STORAGE_KEY_CURRENT_USER)
    }
}
