use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::error_response;
use crate::middleware::auth::{role_guard, GuardState};
use crate::store::gate::Role;
use crate::store::order::{Order, OrderStatus};
use crate::store::{SharedState, StoreError};

//ROUTERS
pub fn courier_api_router(state: SharedState) -> Router {
    Router::new()
        .route("/deliveries", get(get_deliveries))
        .route("/order/:id/status", patch(update_status))
        .layer(Extension(state.clone()))
        .layer(from_fn_with_state(
            GuardState {
                state,
                role: Role::Courier,
            },
            role_guard,
        ))
}

//ROUTES
async fn get_deliveries(Extension(state): Extension<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    let queue: Vec<Order> = state.delivery_queue().into_iter().cloned().collect();
    (StatusCode::OK, Json(queue))
}

async fn update_status(
    Path(id): Path<String>,
    Extension(state): Extension<SharedState>,
    Json(payload): Json<UpdateStatusPayload>,
) -> impl IntoResponse {
    tracing::debug!("->> Called `update_status()` with payload: {:?}", payload);
    let mut state = state.write().await;
    let Some(actor) = state.gate.active_role else {
        return error_response(StoreError::NotPermitted);
    };
    match state.update_order_status(actor, &id, payload.status) {
        Ok(order) => (
            StatusCode::OK,
            Json(json!({
                "message": order.status.label(),
                "order": order,
            })),
        ),
        Err(err) => error_response(err),
    }
}

//Structs
#[derive(Debug, Deserialize)]
struct UpdateStatusPayload {
    status: OrderStatus,
}
