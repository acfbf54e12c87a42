use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::error_response;
use crate::store::product::StockStatus;
use crate::store::SharedState;

//ROUTERS
pub fn cart_router(state: SharedState) -> Router {
    Router::new()
        .route("/cart", get(get_cart).post(add_product))
        .route("/cart/:product_id", patch(patch_entry))
        .layer(Extension(state))
}

//ROUTES
async fn get_cart(Extension(state): Extension<SharedState>) -> impl IntoResponse {
    let state = state.read().await;
    (
        StatusCode::OK,
        Json(json!({
            "items": state.cart,
            "total": state.cart_total(),
        })),
    )
}

async fn add_product(
    Extension(state): Extension<SharedState>,
    Json(payload): Json<AddToCart>,
) -> impl IntoResponse {
    tracing::debug!("->> Called `add_product()` with payload: {:?}", payload);
    let mut state = state.write().await;
    match state.add_to_cart(&payload.product_id) {
        Ok(true) => (
            StatusCode::CREATED,
            Json(json!({ "message": "Savatchaga qo'shildi" })),
        ),
        // Sold out: the button does nothing, and so does the store.
        Ok(false) => (
            StatusCode::OK,
            Json(json!({ "message": StockStatus::OutOfStock.label() })),
        ),
        Err(err) => error_response(err),
    }
}

async fn patch_entry(
    Path(product_id): Path<String>,
    Extension(state): Extension<SharedState>,
    Json(payload): Json<PatchCart>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    match state.set_cart_quantity(&product_id, payload.quantity) {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Savatcha yangilandi" })),
        ),
        Err(err) => error_response(err),
    }
}

//Structs
#[derive(Debug, Deserialize)]
struct AddToCart {
    product_id: String,
}

#[derive(Deserialize)]
struct PatchCart {
    quantity: u32,
}
