//! # Record Store
//!
//! The persistence boundary of the inventory. [`InventoryService`](crate::service::InventoryService)
//! only ever talks to a [`PartStore`], so the actor-backed store can be swapped for any
//! other implementation (or a test double) without touching the domain rules.

use async_trait::async_trait;

use crate::clients::{ActorClient, PartClient};
use crate::model::{NewPart, PartId, VehiclePart};
use crate::part_actor::PartError;

/// Create/read/update access to part records, keyed by [`PartId`].
///
/// Implementations must serialize writes so that concurrent `insert` and `set_stock`
/// calls never lose an update, and must never expose a half-written record to readers.
/// Transport failures are reported as [`PartError::StoreUnavailable`].
#[async_trait]
pub trait PartStore: Send + Sync {
    /// Persists a new record, assigning it a fresh identifier.
    async fn insert(&self, part: NewPart) -> Result<VehiclePart, PartError>;

    /// Looks up one record.
    async fn get(&self, id: &PartId) -> Result<Option<VehiclePart>, PartError>;

    /// All records in insertion order.
    async fn all(&self) -> Result<Vec<VehiclePart>, PartError>;

    /// Replaces the stock of an existing record; fails with [`PartError::PartNotFound`]
    /// when `id` is unknown.
    async fn set_stock(&self, id: &PartId, stock: i64) -> Result<VehiclePart, PartError>;
}

#[async_trait]
impl PartStore for PartClient {
    async fn insert(&self, part: NewPart) -> Result<VehiclePart, PartError> {
        self.create_part(part).await
    }

    async fn get(&self, id: &PartId) -> Result<Option<VehiclePart>, PartError> {
        ActorClient::get(self, id.clone()).await
    }

    async fn all(&self) -> Result<Vec<VehiclePart>, PartError> {
        self.list_parts().await
    }

    async fn set_stock(&self, id: &PartId, stock: i64) -> Result<VehiclePart, PartError> {
        PartClient::set_stock(self, id.clone(), stock).await
    }
}
