use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use crate::store::product::{Category, Product};
use crate::store::SharedState;

//ROUTERS
pub fn menu_router(state: SharedState) -> Router {
    Router::new()
        .route("/menu", get(get_menu))
        .route("/categories", get(get_categories))
        .layer(Extension(state))
}

//ROUTES
async fn get_menu(
    Extension(state): Extension<SharedState>,
    Query(params): Query<MenuQuery>,
) -> impl IntoResponse {
    let state = state.read().await;
    let products: Vec<Product> = match params.category {
        Some(category) => state
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect(),
        None => state.products.clone(),
    };
    (StatusCode::OK, Json(products))
}

async fn get_categories() -> impl IntoResponse {
    let sections: Vec<_> = Category::ALL
        .iter()
        .map(|c| json!({ "id": c.to_string(), "label": c.label() }))
        .collect();
    (StatusCode::OK, Json(sections))
}

//Structs
#[derive(Deserialize)]
struct MenuQuery {
    category: Option<Category>,
}
