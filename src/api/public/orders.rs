use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::api::error_response;
use crate::store::order::{OrderKind, STATUS_STEPS};
use crate::store::{CustomerTab, SharedState};

//ROUTERS
pub fn orders_router(state: SharedState) -> Router {
    Router::new()
        .route("/order", post(place_order).get(list_orders))
        .route("/order/:id", get(track_order))
        .route("/session", get(get_session))
        .route("/session/tab", post(set_tab))
        .layer(Extension(state))
}

//ROUTES
async fn place_order(
    Extension(state): Extension<SharedState>,
    Json(payload): Json<PlaceOrderPayload>,
) -> impl IntoResponse {
    tracing::debug!("->> Called `place_order()` with payload: {:?}", payload);
    if payload.validate().is_err() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Ma'lumotlarni to'liq to'ldiring" })),
        );
    }

    let mut state = state.write().await;
    match state.place_order(
        payload.kind,
        &payload.customer_name,
        &payload.phone,
        payload.address.as_deref(),
    ) {
        Ok(order) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Buyurtma qabul qilindi",
                "order": order,
            })),
        ),
        Err(err) => error_response(err),
    }
}

/// Most recent first, the same order the status tab lists them in.
async fn list_orders(Extension(state): Extension<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    (StatusCode::OK, Json(state.orders.clone()))
}

async fn track_order(
    Path(id): Path<String>,
    Extension(state): Extension<SharedState>,
) -> impl IntoResponse {
    let state = state.read().await;
    match state.order(&id) {
        Ok(order) => {
            let current = order.status.progress_index();
            let steps: Vec<_> = STATUS_STEPS
                .iter()
                .map(|step| {
                    json!({
                        "status": step.to_string(),
                        "label": step.step_label(),
                        "reached": step.progress_index() <= current,
                    })
                })
                .collect();

            (
                StatusCode::OK,
                Json(json!({
                    "order": order,
                    "banner": order.status.label(),
                    "progress": {
                        "index": current,
                        "fraction": order.progress_fraction(),
                        "steps": steps,
                    },
                })),
            )
        }
        Err(err) => error_response(err),
    }
}

async fn get_session(Extension(state): Extension<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    (StatusCode::OK, Json(state.session.clone()))
}

async fn set_tab(
    Extension(state): Extension<SharedState>,
    Json(payload): Json<SetTabPayload>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    state.set_tab(payload.tab);
    (StatusCode::OK, Json(state.session.clone()))
}

//Structs
#[derive(Deserialize)]
struct SetTabPayload {
    tab: CustomerTab,
}

#[derive(Clone, Debug, Deserialize, Validate)]
struct PlaceOrderPayload {
    kind: OrderKind,
    #[validate(length(min = 1))]
    customer_name: String,
    #[validate(length(min = 1))]
    phone: String,
    address: Option<String>,
}
