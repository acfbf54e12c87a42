use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{patch, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::error_response;
use crate::store::SharedState;

//ROUTERS
pub fn admin_rooms_router(state: SharedState) -> Router {
    Router::new()
        .route("/room", post(create_room))
        .route("/room/:id", patch(patch_room).delete(delete_room))
        .route("/room/:id/availability", post(toggle_availability))
        .layer(Extension(state))
}

//ROUTES
async fn create_room(
    Extension(state): Extension<SharedState>,
    Json(payload): Json<CreateRoom>,
) -> impl IntoResponse {
    tracing::debug!("->> Called `create_room()` with payload: {:?}", payload);
    let mut state = state.write().await;
    match state.add_room(payload.name, payload.capacity, payload.price, payload.image) {
        Ok(room) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Room created successfully",
                "room": room,
            })),
        ),
        Err(err) => error_response(err),
    }
}

async fn patch_room(
    Path(id): Path<String>,
    Extension(state): Extension<SharedState>,
    Json(payload): Json<PatchRoomPayload>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    match state.update_room(&id, payload.price, payload.image) {
        Ok(room) => (
            StatusCode::OK,
            Json(json!({
                "message": "Resource patched successfully",
                "room": room,
            })),
        ),
        Err(err) => error_response(err),
    }
}

async fn toggle_availability(
    Path(id): Path<String>,
    Extension(state): Extension<SharedState>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    match state.toggle_room_availability(&id) {
        Ok(is_available) => (
            StatusCode::OK,
            Json(json!({ "is_available": is_available })),
        ),
        Err(err) => error_response(err),
    }
}

async fn delete_room(
    Path(id): Path<String>,
    Extension(state): Extension<SharedState>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    match state.delete_room(&id) {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Resource deleted successfully" })),
        ),
        Err(err) => error_response(err),
    }
}

//Structs
#[derive(Debug, Deserialize)]
struct CreateRoom {
    name: String,
    capacity: u32,
    price: u64,
    image: String,
}

#[derive(Deserialize)]
struct PatchRoomPayload {
    price: Option<u64>,
    image: Option<String>,
}
