//! In-memory session store over a concurrent map.
//!
//! Sessions live only in server memory and vanish on restart; there is no
//! cross-process sharing and no persistence.

use dashmap::DashMap;

use ecobot_core::session::SessionStore;
use ecobot_types::session::SessionId;
use ecobot_types::user::User;

/// DashMap-backed implementation of [`SessionStore`].
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: DashMap<SessionId, User>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn create(&self, user: User) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id, user);
        id
    }

    fn get(&self, id: &SessionId) -> Option<User> {
        self.sessions.get(id).map(|entry| entry.clone())
    }

    fn replace(&self, id: &SessionId, user: User) {
        if let Some(mut entry) = self.sessions.get_mut(id) {
            *entry = user;
        }
    }

    fn destroy(&self, id: &SessionId) {
        self.sessions.remove(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_get_returns_copy() {
        let store = MemorySessionStore::new();
        let id = store.create(User::new("A", "a@x.com", "p"));
        let user = store.get(&id).unwrap();
        assert_eq!(user.email, "a@x.com");
    }

    #[test]
    fn test_get_after_destroy_is_none() {
        let store = MemorySessionStore::new();
        let id = store.create(User::new("A", "a@x.com", "p"));
        store.destroy(&id);
        assert!(store.get(&id).is_none());
    }

    #[test]
    fn test_replace_updates_stored_copy() {
        let store = MemorySessionStore::new();
        let id = store.create(User::new("A", "a@x.com", "p"));

        let mut updated = User::new("A", "a@x.com", "p");
        updated.ecopoints = 10;
        store.replace(&id, updated);

        assert_eq!(store.get(&id).unwrap().ecopoints, 10);
    }

    #[test]
    fn test_replace_on_destroyed_session_is_a_noop() {
        let store = MemorySessionStore::new();
        let id = store.create(User::new("A", "a@x.com", "p"));
        store.destroy(&id);

        store.replace(&id, User::new("A", "a@x.com", "p"));
        assert!(store.get(&id).is_none());
    }

    #[test]
    fn test_unknown_token_is_none() {
        let store = MemorySessionStore::new();
        assert!(store.get(&SessionId::new()).is_none());
    }
}
