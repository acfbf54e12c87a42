pub mod admin;
pub mod courier;
pub mod manager;
pub mod panel;
pub mod public;

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;

use crate::middleware::logging::logging_middleware;
use crate::services::analytics::SalesAnalyst;
use crate::store::gate::AccessPolicy;
use crate::store::{SharedState, StoreError};

use admin::admin_api_router;
use courier::courier_api_router;
use manager::manager_api_router;
use panel::panel_router;
use public::public_api_router;

pub fn create_api_router(
    state: SharedState,
    policy: Arc<dyn AccessPolicy>,
    analyst: Arc<dyn SalesAnalyst>,
) -> Router {
    Router::new()
        .route("/", get(health))
        .nest("/api", public_api_router(state.clone()))
        .nest("/api/panel", panel_router(state.clone(), policy))
        .nest("/api/admin", admin_api_router(state.clone()))
        .nest("/api/courier", courier_api_router(state.clone()))
        .nest("/api/manager", manager_api_router(state, analyst))
        .layer(axum::middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ishlayapti" })))
}

/// One place that turns a store refusal into a wire response, so every
/// handler fails the same way.
pub(crate) fn error_response(err: StoreError) -> (StatusCode, Json<Value>) {
    let status = match &err {
        StoreError::IncompleteDetails
        | StoreError::EmptyCart
        | StoreError::ImageRequired
        | StoreError::NoRoomSelected
        | StoreError::RoomUnavailable(_)
        | StoreError::CartEntryNotFound(_) => StatusCode::BAD_REQUEST,
        StoreError::ProductNotFound(_)
        | StoreError::RoomNotFound(_)
        | StoreError::OrderNotFound(_)
        | StoreError::ImageNotFound(_)
        | StoreError::DeviceNotFound(_) => StatusCode::NOT_FOUND,
        StoreError::WrongPanelCode | StoreError::WrongRoleCode | StoreError::PanelLocked => {
            StatusCode::UNAUTHORIZED
        }
        StoreError::NotPermitted => StatusCode::FORBIDDEN,
        StoreError::NotDeliverable(_) | StoreError::IllegalTransition { .. } => {
            StatusCode::CONFLICT
        }
    };

    (status, Json(json!({ "error": err.to_string() })))
}
