//! Account service: signup and login.

use ecobot_types::error::{AccountError, StoreError};
use ecobot_types::user::User;

use crate::service::credentials::PasswordVerifier;
use crate::store::UserStore;

/// Service for account creation and credential checks.
///
/// Generic over the store and verifier traits -- ecobot-core never depends
/// on ecobot-infra.
pub struct AccountService<S: UserStore, V: PasswordVerifier> {
    store: S,
    verifier: V,
}

impl<S: UserStore, V: PasswordVerifier> AccountService<S, V> {
    pub fn new(store: S, verifier: V) -> Self {
        Self { store, verifier }
    }

    /// Create a new user with zero ecopoints and persist it.
    ///
    /// Rejects empty fields (absent JSON fields deserialize to empty
    /// strings) and duplicate emails. The duplicate check happens inside
    /// [`UserStore::create`] so it cannot race a concurrent signup.
    pub async fn signup(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AccountError> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AccountError::MissingFields);
        }

        let user = self
            .store
            .create(User::new(name, email, password))
            .await
            .map_err(|e| match e {
                StoreError::Conflict(_) => AccountError::DuplicateEmail,
                other => AccountError::Store(other),
            })?;

        tracing::info!(email = %user.email, "user signed up");
        Ok(user)
    }

    /// Look up a user by exact email and password match.
    ///
    /// A linear scan over the whole store, like the original. No partial or
    /// fuzzy match succeeds; an unknown email and a wrong password are
    /// indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AccountError> {
        if email.is_empty() || password.is_empty() {
            return Err(AccountError::MissingFields);
        }

        let users = self.store.load_all().await?;
        users
            .into_iter()
            .find(|u| u.email == email && self.verifier.verify(password, &u.password))
            .ok_or(AccountError::InvalidCredentials)
    }
}
