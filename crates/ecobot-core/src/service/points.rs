//! Points service: the single shared award operation.
//!
//! Both the explicit `/add-points` route and the classify reward path go
//! through [`PointsService::award`]; the read-modify-persist sequence is
//! not duplicated at the route layer.

use ecobot_types::error::StoreError;
use ecobot_types::user::{ECOPOINT_AWARD, User};

use crate::store::UserStore;

/// Service applying the fixed ecopoint award to the persisted record.
pub struct PointsService<S: UserStore> {
    store: S,
}

impl<S: UserStore> PointsService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Award the fixed number of points to `email`, returning the updated
    /// persisted record (for refreshing the caller's session copy).
    pub async fn award(&self, email: &str) -> Result<User, StoreError> {
        let total = self.store.add_ecopoints(email, ECOPOINT_AWARD).await?;
        tracing::debug!(%email, total, "awarded ecopoints");

        self.store
            .find_by_email(email)
            .await?
            .ok_or(StoreError::NotFound)
    }
}
