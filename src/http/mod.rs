//! JSON HTTP API over the inventory service.
//!
//! - `routes.rs`: axum handlers, one per endpoint
//! - `dto.rs`: request/response shapes
//! - `errors.rs`: consistent JSON error bodies

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::{Extension, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::clients::PartClient;
use crate::config::Config;
use crate::service::InventoryService;

pub mod dto;
pub mod errors;
pub mod routes;

/// Shared by every handler through an `Extension`.
pub struct AppState {
    pub service: InventoryService<PartClient>,
    pub default_min_stock_level: i64,
}

/// Builds the full router (public entrypoint used by `main.rs`).
pub fn router(service: InventoryService<PartClient>, config: &Config) -> Router {
    let state = Arc::new(AppState {
        service,
        default_min_stock_level: config.inventory.default_min_stock_level,
    });

    routes::router()
        .layer(Extension(state))
        .layer(cors_layer(&config.server.allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
