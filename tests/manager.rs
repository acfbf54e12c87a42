mod common;

use common::{spawn_app, unlock_role, MANAGER_CODE};
use kamron::services::analytics::FALLBACK_REPORT;
use reqwest::StatusCode;

#[tokio::test]
async fn test_sales_dashboard_lists_the_week() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    unlock_role(&client, &base, "manager", MANAGER_CODE).await;

    let sales = client
        .get(format!("{base}/api/manager/sales"))
        .send()
        .await
        .expect("Failed to send sales request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse sales JSON");

    let days = sales.as_array().expect("sales should be an array");
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["date"], "2024-05-13");
    assert_eq!(days[5]["orders"], 95);
}

#[tokio::test]
async fn test_report_generation_round_trip() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    unlock_role(&client, &base, "manager", MANAGER_CODE).await;

    let response = client
        .post(format!("{base}/api/manager/sales/report"))
        .send()
        .await
        .expect("Failed to send report request");
    assert_eq!(response.status(), StatusCode::OK);
    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse report JSON");
    let report = body["report"].as_str().expect("report should be text");
    assert!(!report.is_empty());
    assert_ne!(report, FALLBACK_REPORT);
    // 2024-05-18 is the busiest seeded day.
    assert!(report.contains("2024-05-18"));

    let stored = client
        .get(format!("{base}/api/manager/sales/report"))
        .send()
        .await
        .expect("Failed to send stored report request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse stored report JSON");
    assert_eq!(stored["pending"], false);
    assert_eq!(stored["text"], report);
}

#[tokio::test]
async fn test_devices_can_be_removed() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    unlock_role(&client, &base, "manager", MANAGER_CODE).await;

    let devices = client
        .get(format!("{base}/api/manager/devices"))
        .send()
        .await
        .expect("Failed to send devices request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse devices JSON");
    assert_eq!(devices.as_array().unwrap().len(), 2);

    let response = client
        .delete(format!("{base}/api/manager/devices/dev2"))
        .send()
        .await
        .expect("Failed to send remove device request");
    assert_eq!(response.status(), StatusCode::OK);

    let devices = client
        .get(format!("{base}/api/manager/devices"))
        .send()
        .await
        .expect("Failed to send devices request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse devices JSON");
    let left = devices.as_array().unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0]["id"], "dev1");

    let response = client
        .delete(format!("{base}/api/manager/devices/dev2"))
        .send()
        .await
        .expect("Failed to send remove device request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
