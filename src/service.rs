//! # Inventory Service
//!
//! Domain rules for vehicle parts, layered over an injected [`PartStore`].
//!
//! - Input is validated before the store is touched, so a rejected call never
//!   leaves a partial write behind.
//! - Restock alerts are derived from the current records on every call; nothing is cached.
//! - Store failures propagate unchanged. The service never retries.

use tracing::{debug, info, instrument, warn};

use crate::model::part::check_quantity;
use crate::model::{NewPart, PartId, VehiclePart};
use crate::part_actor::PartError;
use crate::store::PartStore;

/// Entry point for every inventory operation.
#[derive(Clone)]
pub struct InventoryService<S> {
    store: S,
}

impl<S: PartStore> InventoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates and stores a new part, returning it with its assigned ID.
    ///
    /// # Errors
    /// - [`PartError::NegativeQuantity`] if `stock` or `min_stock_level` is negative
    ///   (checked first).
    /// - [`PartError::MissingField`] if `name`, `part_type` or `car_model` is empty.
    /// - [`PartError::StoreUnavailable`] if the store fails.
    #[instrument(skip(self, part), fields(name = %part.name))]
    pub async fn add_part(&self, part: NewPart) -> Result<VehiclePart, PartError> {
        debug!(?part, "add_part called");
        if let Err(e) = part.validate() {
            warn!(error = %e, "Rejected new part");
            return Err(e);
        }
        let created = self.store.insert(part).await?;
        info!(id = %created.id, "Part added");
        Ok(created)
    }

    /// Lists parts in insertion order.
    ///
    /// With a non-empty `filter`, only parts whose ID contains it (ignoring case) are
    /// returned. An empty result is not an error.
    #[instrument(skip(self))]
    pub async fn list_parts(&self, filter: Option<&str>) -> Result<Vec<VehiclePart>, PartError> {
        let parts = self.store.all().await?;
        let parts: Vec<VehiclePart> = match filter.filter(|f| !f.is_empty()) {
            Some(needle) => parts
                .into_iter()
                .filter(|p| p.id.contains_ignore_case(needle))
                .collect(),
            None => parts,
        };
        debug!(count = parts.len(), "Listed parts");
        Ok(parts)
    }

    /// Every part whose stock is below its minimum level, in insertion order.
    #[instrument(skip(self))]
    pub async fn list_restock_alerts(&self) -> Result<Vec<VehiclePart>, PartError> {
        let alerts: Vec<VehiclePart> = self
            .store
            .all()
            .await?
            .into_iter()
            .filter(VehiclePart::needs_restock)
            .collect();
        debug!(count = alerts.len(), "Computed restock alerts");
        Ok(alerts)
    }

    /// Fetches a single part.
    #[instrument(skip(self))]
    pub async fn get_part(&self, id: &PartId) -> Result<VehiclePart, PartError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| PartError::PartNotFound(id.clone()))
    }

    /// Sets the stock of part `id` to exactly `new_stock`. All other fields stay as they were.
    ///
    /// # Errors
    /// - [`PartError::NegativeQuantity`] if `new_stock` is negative; the store is not contacted.
    /// - [`PartError::PartNotFound`] if `id` is unknown.
    /// - [`PartError::StoreUnavailable`] if the store fails.
    #[instrument(skip(self))]
    pub async fn update_stock(&self, id: &PartId, new_stock: i64) -> Result<VehiclePart, PartError> {
        if let Err(e) = check_quantity("stock", new_stock) {
            warn!(error = %e, "Rejected stock update");
            return Err(e);
        }
        let updated = self.store.set_stock(id, new_stock).await?;
        info!(stock = updated.stock, restock = updated.needs_restock(), "Stock updated");
        Ok(updated)
    }
}
