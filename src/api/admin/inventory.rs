use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::api::error_response;
use crate::store::product::Category;
use crate::store::SharedState;

//ROUTERS
pub fn inventory_router(state: SharedState) -> Router {
    Router::new()
        .route("/product", post(create_product))
        .route(
            "/product/:id",
            axum::routing::patch(patch_product).delete(delete_product),
        )
        .route("/product/:id/stock", post(toggle_stock))
        .layer(Extension(state))
}

//ROUTES
async fn create_product(
    Extension(state): Extension<SharedState>,
    Json(payload): Json<CreateProduct>,
) -> impl IntoResponse {
    tracing::debug!("->> Called `create_product()` with payload: {:?}", payload);
    let mut state = state.write().await;
    match state.add_product(payload.name, payload.price, payload.category, payload.image) {
        Ok(product) => (
            StatusCode::CREATED,
            Json(json!({
                "message": "Product created successfully",
                "product": product,
            })),
        ),
        Err(err) => error_response(err),
    }
}

async fn patch_product(
    Path(id): Path<String>,
    Extension(state): Extension<SharedState>,
    Json(payload): Json<PatchProductPayload>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    match state.update_product(&id, payload.price, payload.image) {
        Ok(product) => (
            StatusCode::OK,
            Json(json!({
                "message": "Resource patched successfully",
                "product": product,
            })),
        ),
        Err(err) => error_response(err),
    }
}

async fn toggle_stock(
    Path(id): Path<String>,
    Extension(state): Extension<SharedState>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    match state.toggle_stock(&id) {
        Ok(status) => (
            StatusCode::OK,
            Json(json!({
                "status": status,
                "label": status.label(),
            })),
        ),
        Err(err) => error_response(err),
    }
}

async fn delete_product(
    Path(id): Path<String>,
    Extension(state): Extension<SharedState>,
) -> impl IntoResponse {
    let mut state = state.write().await;
    match state.delete_product(&id) {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Resource deleted successfully" })),
        ),
        Err(err) => error_response(err),
    }
}

//Structs
#[derive(Debug, Deserialize)]
struct CreateProduct {
    name: String,
    price: u64,
    category: Category,
    image: String,
}

#[derive(Deserialize)]
struct PatchProductPayload {
    price: Option<u64>,
    image: Option<String>,
}
