use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::json;

use crate::api::error_response;
use crate::middleware::auth::{role_guard, GuardState};
use crate::services::analytics::SalesAnalyst;
use crate::store::gate::Role;
use crate::store::SharedState;

//ROUTERS
pub fn manager_api_router(state: SharedState, analyst: Arc<dyn SalesAnalyst>) -> Router {
    Router::new()
        .route("/sales", get(get_sales))
        .route("/sales/report", post(generate_report).get(get_report))
        .route("/devices", get(get_devices))
        .route("/devices/:id", delete(remove_device))
        .layer(Extension(state.clone()))
        .layer(Extension(analyst))
        .layer(from_fn_with_state(
            GuardState {
                state,
                role: Role::Manager,
            },
            role_guard,
        ))
}

//ROUTES
async fn get_sales(Extension(state): Extension<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    (StatusCode::OK, Json(state.sales.clone()))
}

/// The one asynchronous operation in the system. The lock is dropped
/// across the analyst call; the pending flag covers the gap.
async fn generate_report(
    Extension(state): Extension<SharedState>,
    Extension(analyst): Extension<Arc<dyn SalesAnalyst>>,
) -> impl IntoResponse {
    let sales = {
        let mut state = state.write().await;
        state.begin_report();
        state.sales.clone()
    };

    let text = analyst.weekly_report(&sales).await;

    let mut state = state.write().await;
    state.finish_report(text.clone());
    (StatusCode::OK, Json(json!({ "report": text })))
}

async fn get_report(Extension(state): Extension<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    (StatusCode::OK, Json(state.report.clone()))
}

async fn get_devices(Extension(state): Extension<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    (StatusCode::OK, Json(state.devices.clone()))
}

async fn remove_device(
    Path(id): Path<String>,
    Extension(state): Extension<SharedState>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    match state.remove_device(&id) {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Resource deleted successfully" })),
        ),
        Err(err) => error_response(err),
    }
}
