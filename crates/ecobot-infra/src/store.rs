//! JSON flat-file implementation of the user store.
//!
//! The whole collection lives in one JSON array, re-read on every operation
//! and rewritten wholesale on every mutation. Writes go to a temp file in
//! the same directory followed by a rename, so a reader never observes a
//! partial write.
//!
//! Mutating operations (`save_all`, `create`, `add_ecopoints`) serialize on
//! an internal async mutex. The original whole-file pattern let two
//! concurrent point awards read the same snapshot and clobber each other;
//! holding the lock across read-modify-write closes that lost-update race.

use std::path::{Path, PathBuf};

use tokio::sync::Mutex;

use ecobot_core::store::UserStore;
use ecobot_types::error::StoreError;
use ecobot_types::user::User;

/// User store backed by a single JSON file.
pub struct JsonUserStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole collection. A missing file reads as empty.
    async fn read_users(&self) -> Result<Vec<User>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(StoreError::Io(err)),
        };

        serde_json::from_slice(&bytes).map_err(|e| StoreError::Parse(e.to_string()))
    }

    /// Serialize and replace the whole collection atomically (temp + rename).
    ///
    /// Callers must hold `write_lock`.
    async fn write_users(&self, users: &[User]) -> Result<(), StoreError> {
        let json =
            serde_json::to_vec_pretty(users).map_err(|e| StoreError::Parse(e.to_string()))?;

        let mut tmp = self.path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&tmp, &json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

impl UserStore for JsonUserStore {
    async fn load_all(&self) -> Result<Vec<User>, StoreError> {
        self.read_users().await
    }

    async fn save_all(&self, users: &[User]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.write_users(users).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.read_users().await?;
        Ok(users.into_iter().find(|u| u.email == email))
    }

    async fn create(&self, user: User) -> Result<User, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut users = self.read_users().await?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict(user.email));
        }

        users.push(user.clone());
        self.write_users(&users).await?;
        Ok(user)
    }

    async fn add_ecopoints(&self, email: &str, amount: u64) -> Result<u64, StoreError> {
        let _guard = self.write_lock.lock().await;

        let mut users = self.read_users().await?;
        let user = users
            .iter_mut()
            .find(|u| u.email == email)
            .ok_or(StoreError::NotFound)?;

        user.ecopoints += amount;
        let total = user.ecopoints;
        self.write_users(&users).await?;
        Ok(total)
    }
}
