use serde::{Deserialize, Serialize};

use crate::model::NewPart;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `POST /api/parts`.
///
/// Text fields default to empty so an absent field is reported the same way as a
/// blank one.
#[derive(Debug, Deserialize)]
pub struct CreatePartRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub part_type: String,
    #[serde(default)]
    pub car_model: String,
    pub stock: i64,
    pub min_stock_level: Option<i64>,
}

impl CreatePartRequest {
    pub fn into_new_part(self, default_min_stock_level: i64) -> NewPart {
        NewPart {
            name: self.name,
            part_type: self.part_type,
            car_model: self.car_model,
            stock: self.stock,
            min_stock_level: self.min_stock_level.unwrap_or(default_min_stock_level),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListPartsQuery {
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStockQuery {
    pub new_stock: i64,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}
