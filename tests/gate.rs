mod common;

use common::{spawn_app, unlock_role, ADMIN_CODE, COURIER_CODE, PANEL_CODE};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_wrong_panel_code_changes_nothing() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/panel/unlock"))
        .json(&json!({ "code": "guess" }))
        .send()
        .await
        .expect("Failed to send unlock request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let gate = client
        .get(format!("{base}/api/panel/session"))
        .send()
        .await
        .expect("Failed to send session request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse session JSON");
    assert_eq!(gate["unlocked"], false);
    assert!(gate["active_role"].is_null());
}

#[tokio::test]
async fn test_role_stage_requires_the_panel_stage() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/panel/role"))
        .json(&json!({ "role": "admin", "code": ADMIN_CODE }))
        .send()
        .await
        .expect("Failed to send role request");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_role_code_leaves_the_role_unset() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/api/panel/unlock"))
        .json(&json!({ "code": PANEL_CODE }))
        .send()
        .await
        .expect("Failed to send unlock request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .post(format!("{base}/api/panel/role"))
        .json(&json!({ "role": "courier", "code": "nope" }))
        .send()
        .await
        .expect("Failed to send role request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let gate = client
        .get(format!("{base}/api/panel/session"))
        .send()
        .await
        .expect("Failed to send session request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse session JSON");
    assert_eq!(gate["unlocked"], true);
    assert!(gate["active_role"].is_null());
}

#[tokio::test]
async fn test_staff_routes_are_closed_without_the_matching_role() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{base}/api/manager/sales"))
        .send()
        .await
        .expect("Failed to send sales request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    // A courier session does not open the manager panel either.
    unlock_role(&client, &base, "courier", COURIER_CODE).await;
    let response = client
        .get(format!("{base}/api/manager/sales"))
        .send()
        .await
        .expect("Failed to send sales request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_leaving_a_role_closes_its_routes_again() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    unlock_role(&client, &base, "admin", ADMIN_CODE).await;
    let response = client
        .post(format!("{base}/api/admin/product/1/stock"))
        .send()
        .await
        .expect("Failed to send toggle request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .delete(format!("{base}/api/panel/role"))
        .send()
        .await
        .expect("Failed to send leave request");
    assert_eq!(response.status(), StatusCode::OK);

    let response = client
        .post(format!("{base}/api/admin/product/1/stock"))
        .send()
        .await
        .expect("Failed to send toggle request");
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
