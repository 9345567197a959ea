//! Error types for the part inventory.

use thiserror::Error;

use crate::model::PartId;

/// Errors that can occur during part operations.
///
/// Every variant names the offending field or identifier so callers can present
/// an actionable message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PartError {
    /// A required text field was empty.
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    /// A stock quantity was negative.
    #[error("{field} must not be negative (got {value})")]
    NegativeQuantity { field: &'static str, value: i64 },

    /// The referenced part does not exist.
    #[error("Part not found: {0}")]
    PartNotFound(PartId),

    /// The record store could not be reached or failed.
    #[error("Record store unavailable: {0}")]
    StoreUnavailable(String),
}

