pub mod cart;
pub mod menu;
pub mod orders;
pub mod rooms;
pub mod uploads;

use axum::Router;

use crate::store::SharedState;

use cart::cart_router;
use menu::menu_router;
use orders::orders_router;
use rooms::rooms_router;
use uploads::uploads_router;

pub fn public_api_router(state: SharedState) -> Router {
    Router::new()
        .merge(menu_router(state.clone()))
        .merge(rooms_router(state.clone()))
        .merge(cart_router(state.clone()))
        .merge(orders_router(state.clone()))
        .merge(uploads_router(state))
}
