//! The vehicle part entity and its payloads.
//!
//! [`VehiclePart`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait
//! (see [`part_actor::entity`](crate::part_actor::entity)), so the whole catalogue is
//! owned by a single [`ResourceActor`](crate::framework::ResourceActor).
//!
//! - Creation payload: [`NewPart`]
//! - Update payload: [`StockUpdate`]

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

use crate::part_actor::PartError;

/// Opaque, store-assigned identifier for a part.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartId(String);

impl PartId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random (v4) UUID. Collisions are not a practical concern, so IDs are
    /// never reused.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring containment, the matching rule of the part listing filter.
    pub fn contains_ignore_case(&self, needle: &str) -> bool {
        self.0.to_lowercase().contains(&needle.to_lowercase())
    }
}

impl Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehiclePart {
    pub id: PartId,
    pub name: String,
    pub part_type: String,
    pub car_model: String,
    pub stock: i64,
    pub min_stock_level: i64,
}

impl VehiclePart {
    /// Builds a part from a validated payload and the ID the store assigned.
    pub fn new(id: PartId, params: NewPart) -> Self {
        Self {
            id,
            name: params.name,
            part_type: params.part_type,
            car_model: params.car_model,
            stock: params.stock,
            min_stock_level: params.min_stock_level,
        }
    }

    /// A part needs restocking while its stock is strictly below the minimum level.
    pub fn needs_restock(&self) -> bool {
        self.stock < self.min_stock_level
    }
}

/// Payload for creating a part. The store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPart {
    pub name: String,
    pub part_type: String,
    pub car_model: String,
    pub stock: i64,
    pub min_stock_level: i64,
}

impl NewPart {
    pub fn new(
        name: impl Into<String>,
        part_type: impl Into<String>,
        car_model: impl Into<String>,
        stock: i64,
        min_stock_level: i64,
    ) -> Self {
        Self {
            name: name.into(),
            part_type: part_type.into(),
            car_model: car_model.into(),
            stock,
            min_stock_level,
        }
    }

    /// Checks quantities first, then the required text fields, stopping at the first failure.
    pub fn validate(&self) -> Result<(), PartError> {
        check_quantity("stock", self.stock)?;
        check_quantity("min_stock_level", self.min_stock_level)?;
        check_text("name", &self.name)?;
        check_text("part_type", &self.part_type)?;
        check_text("car_model", &self.car_model)?;
        Ok(())
    }
}

/// Absolute replacement of a part's stock count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockUpdate {
    pub stock: i64,
}

pub(crate) fn check_quantity(field: &'static str, value: i64) -> Result<(), PartError> {
    if value < 0 {
        return Err(PartError::NegativeQuantity { field, value });
    }
    Ok(())
}

fn check_text(field: &'static str, value: &str) -> Result<(), PartError> {
    if value.is_empty() {
        return Err(PartError::MissingField { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn oil_filter() -> NewPart {
        NewPart::new("Oil Filter", "Engine", "Toyota Camry 2020", 5, 20)
    }

    #[test]
    fn test_valid_payload_passes() {
        assert_eq!(oil_filter().validate(), Ok(()));
    }

    #[test]
    fn test_negative_quantities_are_checked_before_text() {
        let payload = NewPart::new("", "", "", -1, 10);
        assert_eq!(
            payload.validate(),
            Err(PartError::NegativeQuantity {
                field: "stock",
                value: -1
            })
        );

        let payload = NewPart::new("", "Brake", "All Models", 3, -4);
        assert_eq!(
            payload.validate(),
            Err(PartError::NegativeQuantity {
                field: "min_stock_level",
                value: -4
            })
        );
    }

    #[test]
    fn test_whitespace_text_is_not_missing() {
        let mut payload = oil_filter();
        payload.name = " ".into();
        payload.car_model = "\t".into();
        assert_eq!(payload.validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let mut payload = oil_filter();
        payload.part_type = String::new();
        payload.car_model = String::new();
        assert_eq!(
            payload.validate(),
            Err(PartError::MissingField { field: "part_type" })
        );

        let mut payload = oil_filter();
        payload.car_model = String::new();
        assert_eq!(
            payload.validate(),
            Err(PartError::MissingField { field: "car_model" })
        );
    }

    #[test]
    fn test_zero_quantities_are_valid() {
        let payload = NewPart::new("Fuse", "Electrical", "All Models", 0, 0);
        assert!(payload.validate().is_ok());
        assert!(!VehiclePart::new(PartId::generate(), payload).needs_restock());
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(PartId::generate(), PartId::generate());
    }

    #[test]
    fn test_part_serializes_with_plain_string_id() {
        let part = VehiclePart::new(PartId::new("O1"), oil_filter());
        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["id"], "O1");
        assert_eq!(json["min_stock_level"], 20);
    }

    proptest! {
        #[test]
        fn prop_needs_restock_iff_below_minimum(stock in 0i64..1_000, min in 0i64..1_000) {
            let part = VehiclePart::new(
                PartId::generate(),
                NewPart::new("Part", "Type", "Model", stock, min),
            );
            prop_assert_eq!(part.needs_restock(), stock < min);
        }

        #[test]
        fn prop_filter_matches_any_recased_substring(
            id in "[a-zA-Z0-9-]{1,36}",
            start in 0usize..36,
            len in 0usize..36,
        ) {
            let start = start.min(id.len());
            let end = (start + len).min(id.len());
            let needle = id[start..end].to_uppercase();
            prop_assert!(PartId::new(id.clone()).contains_ignore_case(&needle));
        }

        #[test]
        fn prop_filter_rejects_foreign_characters(id in "[a-z0-9]{1,36}") {
            prop_assert!(!PartId::new(id).contains_ignore_case("_"));
        }
    }
}
