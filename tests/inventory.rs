mod common;

use common::{spawn_app, unlock_role, ADMIN_CODE};
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_product_without_an_image_is_rejected() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    unlock_role(&client, &base, "admin", ADMIN_CODE).await;

    let response = client
        .post(format!("{base}/api/admin/product"))
        .json(&json!({
            "name": "Lag'mon",
            "price": 30000,
            "category": "mains",
            "image": "",
        }))
        .send()
        .await
        .expect("Failed to send create request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse error JSON");
    assert_eq!(body["error"], "Rasm yuklang");
}

#[tokio::test]
async fn test_new_product_appears_first_on_the_menu() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    unlock_role(&client, &base, "admin", ADMIN_CODE).await;

    let response = client
        .post(format!("{base}/api/admin/product"))
        .json(&json!({
            "name": "Lag'mon",
            "price": 30000,
            "category": "mains",
            "image": "https://picsum.photos/seed/lagmon/400/300",
        }))
        .send()
        .await
        .expect("Failed to send create request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let menu = client
        .get(format!("{base}/api/menu"))
        .send()
        .await
        .expect("Failed to send menu request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse menu JSON");
    assert_eq!(menu[0]["name"], "Lag'mon");
    assert_eq!(menu[0]["status"], "in_stock");
}

#[tokio::test]
async fn test_double_toggle_restores_the_stock_state() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    unlock_role(&client, &base, "admin", ADMIN_CODE).await;

    let first = client
        .post(format!("{base}/api/admin/product/1/stock"))
        .send()
        .await
        .expect("Failed to send toggle request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse toggle JSON");
    assert_eq!(first["status"], "out_of_stock");

    let second = client
        .post(format!("{base}/api/admin/product/1/stock"))
        .send()
        .await
        .expect("Failed to send toggle request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse toggle JSON");
    assert_eq!(second["status"], "in_stock");
}

#[tokio::test]
async fn test_menu_filter_by_category() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();

    let drinks = client
        .get(format!("{base}/api/menu?category=drinks"))
        .send()
        .await
        .expect("Failed to send menu request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse menu JSON");

    let names: Vec<_> = drinks
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Koka-Kola 1.5L", "Choy (Ko'k/Qora)"]);
}

#[tokio::test]
async fn test_room_lifecycle() {
    let base = spawn_app().await;
    let client = reqwest::Client::new();
    unlock_role(&client, &base, "admin", ADMIN_CODE).await;

    let response = client
        .post(format!("{base}/api/admin/room"))
        .json(&json!({
            "name": "Yozgi ayvon",
            "capacity": 10,
            "price": 80000,
            "image": "https://picsum.photos/seed/ayvon/400/300",
        }))
        .send()
        .await
        .expect("Failed to send create room request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse room JSON");
    let id = body["room"]["id"].as_str().unwrap().to_string();

    let response = client
        .patch(format!("{base}/api/admin/room/{id}"))
        .json(&json!({ "price": 90000 }))
        .send()
        .await
        .expect("Failed to send patch room request");
    assert_eq!(response.status(), StatusCode::OK);

    let toggled = client
        .post(format!("{base}/api/admin/room/{id}/availability"))
        .send()
        .await
        .expect("Failed to send availability request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse availability JSON");
    assert_eq!(toggled["is_available"], false);

    // A taken room cannot start a reservation.
    let response = client
        .post(format!("{base}/api/reservation/room"))
        .json(&json!({ "room_id": id }))
        .send()
        .await
        .expect("Failed to send select room request");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = client
        .delete(format!("{base}/api/admin/room/{id}"))
        .send()
        .await
        .expect("Failed to send delete room request");
    assert_eq!(response.status(), StatusCode::OK);

    let rooms = client
        .get(format!("{base}/api/rooms"))
        .send()
        .await
        .expect("Failed to send rooms request")
        .json::<serde_json::Value>()
        .await
        .expect("Failed to parse rooms JSON");
    assert!(rooms.as_array().unwrap().iter().all(|r| r["id"] != id.as_str()));
}
