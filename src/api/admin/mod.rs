pub mod inventory;
pub mod rooms;
pub mod upload;

use axum::{middleware::from_fn_with_state, Router};

use crate::middleware::auth::{role_guard, GuardState};
use crate::store::gate::Role;
use crate::store::SharedState;

use inventory::inventory_router;
use rooms::admin_rooms_router;
use upload::upload_router;

pub fn admin_api_router(state: SharedState) -> Router {
    Router::new()
        .merge(inventory_router(state.clone()))
        .merge(admin_rooms_router(state.clone()))
        .merge(upload_router(state.clone()))
        .layer(from_fn_with_state(
            GuardState {
                state,
                role: Role::Admin,
            },
            role_guard,
        ))
}
