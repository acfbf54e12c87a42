use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

use crate::store::gate::Role;
use crate::store::SharedState;

/// Router-level state for [`role_guard`]: which role a subtree requires.
#[derive(Clone)]
pub struct GuardState {
    pub state: SharedState,
    pub role: Role,
}

/// Lets a request through only while the panel gate holds the required
/// role. The gate itself is driven by the /api/panel routes; this guard
/// never reads codes.
pub async fn role_guard(
    State(guard): State<GuardState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let gate = guard.state.read().await.gate.clone();
    if !gate.unlocked || gate.active_role != Some(guard.role) {
        tracing::debug!(required = %guard.role, "rejected panel request");
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(req).await)
}
