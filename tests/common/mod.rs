#![allow(dead_code)]

use std::sync::Arc;

use tokio::sync::RwLock;

use kamron::api::create_api_router;
use kamron::services::analytics::CannedAnalyst;
use kamron::store::gate::{AccessPolicy, Role};
use kamron::store::AppState;

pub const PANEL_CODE: &str = "mx097aixom";
pub const MANAGER_CODE: &str = "189sidnetbosss";
pub const ADMIN_CODE: &str = "11wer9hk";
pub const COURIER_CODE: &str = "buysel78ui";

/// Fixed codes so the tests never depend on a .env file.
struct TestCodes;

impl AccessPolicy for TestCodes {
    fn verify_panel(&self, code: &str) -> bool {
        code == PANEL_CODE
    }

    fn verify_role(&self, role: Role, code: &str) -> bool {
        match role {
            Role::Manager => code == MANAGER_CODE,
            Role::Admin => code == ADMIN_CODE,
            Role::Courier => code == COURIER_CODE,
        }
    }
}

/// Boots the full router on an ephemeral port and returns its base url.
pub async fn spawn_app() -> String {
    let state = Arc::new(RwLock::new(AppState::seeded()));
    let app = create_api_router(state, Arc::new(TestCodes), Arc::new(CannedAnalyst));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server crashed");
    });

    format!("http://{addr}")
}

/// Walks both gate stages for the given role.
pub async fn unlock_role(client: &reqwest::Client, base: &str, role: &str, code: &str) {
    let response = client
        .post(format!("{base}/api/panel/unlock"))
        .json(&serde_json::json!({ "code": PANEL_CODE }))
        .send()
        .await
        .expect("Failed to send unlock request");
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let response = client
        .post(format!("{base}/api/panel/role"))
        .json(&serde_json::json!({ "role": role, "code": code }))
        .send()
        .await
        .expect("Failed to send role request");
    assert_eq!(response.status(), reqwest::StatusCode::OK);
}

/// Drops a product into the cart and asserts it was actually taken.
pub async fn add_to_cart(client: &reqwest::Client, base: &str, product_id: &str) {
    let response = client
        .post(format!("{base}/api/cart"))
        .json(&serde_json::json!({ "product_id": product_id }))
        .send()
        .await
        .expect("Failed to send add to cart request");
    assert_eq!(response.status(), reqwest::StatusCode::CREATED);
}
