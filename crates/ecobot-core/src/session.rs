//! Session store trait definition.
//!
//! Associates an opaque per-browser token with a *copy* of a user record
//! taken at login time. The copy can drift from the persisted record; the
//! points-award path refreshes it via [`SessionStore::replace`].
//!
//! The store is injected into route handlers through application state
//! rather than accessed as ambient global state. State is process-local
//! and lost on restart; there is no cross-process sharing.

use std::sync::Arc;

use ecobot_types::session::SessionId;
use ecobot_types::user::User;

/// Trait for session persistence (in server memory).
pub trait SessionStore: Send + Sync {
    /// Bind a fresh token to a copy of `user`, returning the token.
    fn create(&self, user: User) -> SessionId;

    /// The user copy bound to `id`, if the session is live.
    fn get(&self, id: &SessionId) -> Option<User>;

    /// Swap the stored copy for an existing session. No-op if the session
    /// has already been destroyed.
    fn replace(&self, id: &SessionId, user: User);

    /// Unbind `id`; subsequent `get` calls return None.
    fn destroy(&self, id: &SessionId);
}

impl<S: SessionStore> SessionStore for Arc<S> {
    fn create(&self, user: User) -> SessionId {
        (**self).create(user)
    }

    fn get(&self, id: &SessionId) -> Option<User> {
        (**self).get(id)
    }

    fn replace(&self, id: &SessionId, user: User) {
        (**self).replace(id, user)
    }

    fn destroy(&self, id: &SessionId) {
        (**self).destroy(id)
    }
}
