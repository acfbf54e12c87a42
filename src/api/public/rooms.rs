use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::error_response;
use crate::store::SharedState;

//ROUTERS
pub fn rooms_router(state: SharedState) -> Router {
    Router::new()
        .route("/rooms", get(get_rooms))
        .route(
            "/reservation",
            get(get_reservation).delete(clear_reservation),
        )
        .route("/reservation/room", post(select_room))
        .route("/reservation/preorder", post(set_pre_order))
        .layer(Extension(state))
}

//ROUTES
async fn get_rooms(Extension(state): Extension<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    (StatusCode::OK, Json(state.rooms.clone()))
}

/// The reservation being configured, with the running totals the summary
/// card prints.
async fn get_reservation(Extension(state): Extension<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    let room = state
        .session
        .selected_room
        .as_deref()
        .and_then(|id| state.room(id).ok().cloned());
    let room_price = room.as_ref().map(|r| r.price).unwrap_or(0);
    let food_total = state.cart_total();

    (
        StatusCode::OK,
        Json(json!({
            "room": room,
            "pre_order": state.session.pre_order,
            "food_total": food_total,
            "total": room_price + food_total,
        })),
    )
}

async fn select_room(
    Extension(state): Extension<SharedState>,
    Json(payload): Json<SelectRoomPayload>,
) -> impl IntoResponse {
    tracing::debug!("->> Called `select_room()` with payload: {:?}", payload);
    let mut state = state.write().await;
    match state.select_room(&payload.room_id) {
        Ok(room) => (StatusCode::OK, Json(json!({ "room": room }))),
        Err(err) => error_response(err),
    }
}

async fn set_pre_order(
    Extension(state): Extension<SharedState>,
    Json(payload): Json<PreOrderPayload>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    state.set_pre_order(payload.enabled);
    (
        StatusCode::OK,
        Json(json!({ "pre_order": payload.enabled })),
    )
}

async fn clear_reservation(Extension(state): Extension<SharedState>) -> impl IntoResponse {
    let mut state = state.write().await;
    state.clear_reservation();
    (StatusCode::OK, Json(json!({ "message": "Tanlov bekor qilindi" })))
}

//Structs
#[derive(Debug, Deserialize)]
struct SelectRoomPayload {
    room_id: String,
}

#[derive(Deserialize)]
struct PreOrderPayload {
    enabled: bool,
}
