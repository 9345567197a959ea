use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Extension, Path, Query,
    },
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use crate::http::dto::{CreatePartRequest, ListPartsQuery, RootResponse, UpdateStockQuery};
use crate::http::errors;
use crate::http::AppState;
use crate::model::PartId;

pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/parts", get(list_parts).post(create_part))
        .route("/api/parts/:id", get(get_part).put(update_stock))
        .route("/api/alerts", get(list_alerts))
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Vehicle Parts Inventory System API",
    })
}

pub async fn list_parts(
    Extension(state): Extension<Arc<AppState>>,
    query: Result<Query<ListPartsQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return errors::json_error(e.status(), "invalid_request", e.body_text()),
    };
    match state.service.list_parts(query.filter.as_deref()).await {
        Ok(parts) => Json(parts).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_part(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> Response {
    match state.service.get_part(&PartId::new(id)).await {
        Ok(part) => Json(part).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create_part(
    Extension(state): Extension<Arc<AppState>>,
    body: Result<Json<CreatePartRequest>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_error(e.status(), "invalid_request", e.body_text()),
    };
    let part = body.into_new_part(state.default_min_stock_level);
    match state.service.add_part(part).await {
        Ok(created) => Json(created).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update_stock(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
    query: Result<Query<UpdateStockQuery>, QueryRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return errors::json_error(e.status(), "invalid_request", e.body_text()),
    };
    match state.service.update_stock(&PartId::new(id), query.new_stock).await {
        Ok(updated) => Json(updated).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn list_alerts(Extension(state): Extension<Arc<AppState>>) -> Response {
    match state.service.list_restock_alerts().await {
        Ok(parts) => Json(parts).into_response(),
        Err(e) => e.into_response(),
    }
}
