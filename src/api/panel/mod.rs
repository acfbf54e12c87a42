use std::sync::Arc;

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
use crate::store::gate::{AccessPolicy, Role};
use crate::store::SharedState;

//ROUTERS
pub fn panel_router(state: SharedState, policy: Arc<dyn AccessPolicy>) -> Router {
    Router::new()
        .route("/unlock", post(unlock))
        .route("/role", post(authorize_role).delete(leave_role))
        .route("/session", get(get_gate))
        .layer(Extension(state))
        .layer(Extension(policy))
}

//ROUTES
async fn unlock(
    Extension(state): Extension<SharedState>,
    Extension(policy): Extension<Arc<dyn AccessPolicy>>,
    Json(payload): Json<UnlockPayload>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    match state.unlock_panel(policy.as_ref(), &payload.code) {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Panel ochildi" }))),
        Err(err) => error_response(err),
    }
}

async fn authorize_role(
    Extension(state): Extension<SharedState>,
    Extension(policy): Extension<Arc<dyn AccessPolicy>>,
    Json(payload): Json<RoleAuthPayload>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    match state.authorize_role(policy.as_ref(), payload.role, &payload.code) {
        Ok(role) => (
            StatusCode::OK,
            Json(json!({ "message": "Sessiya faol", "role": role })),
        ),
        Err(err) => error_response(err),
    }
}

async fn leave_role(Extension(state): Extension<SharedState>) -> impl IntoResponse {
    let mut state = state.write().await;
    state.leave_role();
    (
        StatusCode::OK,
        Json(json!({ "message": "Rollarga qaytildi" })),
    )
}

async fn get_gate(Extension(state): Extension<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    (StatusCode::OK, Json(state.gate.clone()))
}

//Structs
#[derive(Deserialize)]
struct UnlockPayload {
    code: String,
}

#[derive(Deserialize)]
struct RoleAuthPayload {
    role: Role,
    code: String,
}
