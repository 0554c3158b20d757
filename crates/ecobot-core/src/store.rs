//! User store trait definition.
//!
//! The store is a whole-file collection of user records: every operation
//! re-reads the persisted collection, so cost is O(total users) per request.
//! That is a deliberate simplicity trade-off carried from the original
//! flat-file design, acceptable only at small scale.
//!
//! Implementations live in ecobot-infra (e.g., `JsonUserStore`).
//! Uses native async fn in traits (Rust 2024 edition, no async_trait macro).

use std::sync::Arc;

use ecobot_types::error::StoreError;
use ecobot_types::user::User;

/// Repository trait for user persistence.
///
/// `load_all`/`save_all` are the whole-file primitives of the original
/// contract. `create` and `add_ecopoints` are compound read-modify-write
/// operations; implementations must make each of them atomic with respect
/// to the other mutating operations (no lost updates between two concurrent
/// point awards, no duplicate emails racing past the uniqueness check).
pub trait UserStore: Send + Sync {
    /// Read the entire persisted collection. An absent store reads as empty.
    fn load_all(&self) -> impl std::future::Future<Output = Result<Vec<User>, StoreError>> + Send;

    /// Overwrite the entire persisted collection.
    fn save_all(
        &self,
        users: &[User],
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Look up a user by exact email.
    fn find_by_email(
        &self,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, StoreError>> + Send;

    /// Append a new user. Fails with [`StoreError::Conflict`] if the email
    /// is already present; the duplicate check and the append are one
    /// guarded operation.
    fn create(
        &self,
        user: User,
    ) -> impl std::future::Future<Output = Result<User, StoreError>> + Send;

    /// Increment a user's ecopoints by `amount` and persist, returning the
    /// new total. Fails with [`StoreError::NotFound`] for an unknown email.
    fn add_ecopoints(
        &self,
        email: &str,
        amount: u64,
    ) -> impl std::future::Future<Output = Result<u64, StoreError>> + Send;
}

// Services hold the store by value; sharing one store (and its internal
// write lock) across services goes through Arc.
impl<S: UserStore> UserStore for Arc<S> {
    async fn load_all(&self) -> Result<Vec<User>, StoreError> {
        (**self).load_all().await
    }

    async fn save_all(&self, users: &[User]) -> Result<(), StoreError> {
        (**self).save_all(users).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        (**self).find_by_email(email).await
    }

    async fn create(&self, user: User) -> Result<User, StoreError> {
        (**self).create(user).await
    }

    async fn add_ecopoints(&self, email: &str, amount: u64) -> Result<u64, StoreError> {
        (**self).add_ecopoints(email, amount).await
    }
}

#[cfg(test)]
pub(crate) mod tests_support {
    //! In-memory [`UserStore`] used by service unit tests.

    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct MemoryStore {
        users: Mutex<Vec<User>>,
    }

    impl UserStore for MemoryStore {
        async fn load_all(&self) -> Result<Vec<User>, StoreError> {
            Ok(self.users.lock().unwrap().clone())
        }

        async fn save_all(&self, users: &[User]) -> Result<(), StoreError> {
            *self.users.lock().unwrap() = users.to_vec();
            Ok(())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.email == email)
                .cloned())
        }

        async fn create(&self, user: User) -> Result<User, StoreError> {
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.email == user.email) {
                return Err(StoreError::Conflict(user.email));
            }
            users.push(user.clone());
            Ok(user)
        }

        async fn add_ecopoints(&self, email: &str, amount: u64) -> Result<u64, StoreError> {
            let mut users = self.users.lock().unwrap();
            let user = users
                .iter_mut()
                .find(|u| u.email == email)
                .ok_or(StoreError::NotFound)?;
            user.ecopoints += amount;
            Ok(user.ecopoints)
        }
    }
}
