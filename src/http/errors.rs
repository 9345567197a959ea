use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{json, Map, Value};

use crate::part_actor::PartError;

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Maps a domain failure to its status code and JSON body.
///
/// Validation failures carry the offending `field`, lookups the offending `id`.
pub fn part_error_to_response(err: PartError) -> Response {
    let (status, code) = match &err {
        PartError::MissingField { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "missing_field"),
        PartError::NegativeQuantity { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "negative_quantity"),
        PartError::PartNotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        PartError::StoreUnavailable(_) => (StatusCode::SERVICE_UNAVAILABLE, "store_unavailable"),
    };

    let mut body = Map::new();
    body.insert("error".into(), Value::from(code));
    body.insert("message".into(), Value::from(err.to_string()));
    match &err {
        PartError::MissingField { field } | PartError::NegativeQuantity { field, .. } => {
            body.insert("field".into(), Value::from(*field));
        }
        PartError::PartNotFound(id) => {
            body.insert("id".into(), Value::from(id.as_str()));
        }
        PartError::StoreUnavailable(_) => {}
    }

    (status, axum::Json(Value::Object(body))).into_response()
}

impl IntoResponse for PartError {
    fn into_response(self) -> Response {
        part_error_to_response(self)
    }
}
