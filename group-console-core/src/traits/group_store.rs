//! Group store abstract Trait

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{CreateGroupRequest, Group};

/// Group Store Trait
///
/// The remote collection of group records, as seen by a client.
///
/// Platform implementation:
/// - HTTP: [`HttpGroupStore`](crate::client::HttpGroupStore) (reqwest)
/// - Tests: in-memory mocks owned by the front end
#[async_trait]
pub trait GroupStore: Send + Sync {
    /// Fetch the full group collection, in the store's display order
    async fn list_all(&self) -> CoreResult<Vec<Group>>;

    /// Create a group and return the persisted record
    ///
    /// # Arguments
    /// * `request` - Name and active flag for the new group
    ///
    /// The returned [`Group`] carries the store-assigned id and timestamps.
    async fn create(&self, request: &CreateGroupRequest) -> CoreResult<Group>;
}
