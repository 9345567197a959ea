//! [`ActorEntity`] implementation for [`VehiclePart`].
//!
//! Both hooks re-check the quantity rules inside the actor, so a record in the store
//! never holds a negative stock or threshold no matter which client sent the request.

use crate::framework::ActorEntity;
use crate::model::part::check_quantity;
use crate::model::{NewPart, PartId, StockUpdate, VehiclePart};
use crate::part_actor::PartError;

impl ActorEntity for VehiclePart {
    type Id = PartId;
    type Create = NewPart;
    type Update = StockUpdate;
    type Error = PartError;

    fn from_create_params(id: PartId, params: NewPart) -> Result<Self, PartError> {
        params.validate()?;
        Ok(Self::new(id, params))
    }

    /// Replaces `stock` with the absolute value carried by the update. Nothing else changes.
    fn on_update(&mut self, update: StockUpdate) -> Result<(), PartError> {
        check_quantity("stock", update.stock)?;
        self.stock = update.stock;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rejects_invalid_payload() {
        let params = NewPart::new("Brake Pad", "Brake", "All Models", -1, 10);
        let err = VehiclePart::from_create_params(PartId::new("B1"), params).unwrap_err();
        assert_eq!(
            err,
            PartError::NegativeQuantity {
                field: "stock",
                value: -1
            }
        );
    }

    #[test]
    fn test_update_replaces_stock_only() {
        let params = NewPart::new("Oil Filter", "Engine", "Toyota Camry 2020", 5, 20);
        let mut part = VehiclePart::from_create_params(PartId::new("O1"), params).unwrap();
        let before = part.clone();

        part.on_update(StockUpdate { stock: 25 }).unwrap();

        assert_eq!(part.stock, 25);
        assert_eq!(
            VehiclePart {
                stock: before.stock,
                ..part.clone()
            },
            before
        );
    }

    #[test]
    fn test_negative_update_leaves_part_unchanged() {
        let params = NewPart::new("Oil Filter", "Engine", "Toyota Camry 2020", 5, 20);
        let mut part = VehiclePart::from_create_params(PartId::new("O1"), params).unwrap();

        let err = part.on_update(StockUpdate { stock: -3 }).unwrap_err();
        assert!(matches!(err, PartError::NegativeQuantity { value: -3, .. }));
        assert_eq!(part.stock, 5);
    }
}
