use axum::{
    extract::{Extension, Multipart},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::json;

use crate::store::SharedState;

//ROUTERS
pub fn upload_router(state: SharedState) -> Router {
    Router::new()
        .route("/image", post(upload))
        .layer(Extension(state))
}

//ROUTES
async fn upload(
    Extension(state): Extension<SharedState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let field = match multipart.next_field().await.unwrap_or(None) {
        Some(field) => field,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "No file field in request" })),
            );
        }
    };

    let file_name = match field.file_name().or(field.name()) {
        Some(name) => name.to_owned(),
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "File name is not set." })),
            );
        }
    };

    if !FILE_NAME_REGEX.is_match(&file_name) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "Invalid file name. It should contain only Latin letters, numbers, '-', or '_'."
            })),
        );
    }

    let content_type = match field.content_type() {
        Some(content_type) => content_type.to_owned(),
        None => mime_guess::from_path(&file_name)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_owned(),
    };

    if !ALLOWED_CONTENT_TYPES.contains(&content_type.as_str()) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Unsupported content type." })),
        );
    }

    let data = match field.bytes().await {
        Ok(data) => data,
        Err(err) => {
            tracing::error!("Multipart error: {err}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to read file bytes." })),
            );
        }
    };
    if data.len() > file_size_limit() {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(json!({ "error": "Payload too large" })),
        );
    }

    let reference = state
        .write()
        .await
        .store_image(file_name, content_type, data.to_vec());

    (
        StatusCode::CREATED,
        Json(json!({
            "message": "File uploaded successfully.",
            "image": reference,
        })),
    )
}

//utils
const ALLOWED_CONTENT_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

static FILE_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]{1,48}(\.[a-zA-Z0-9]{1,8})?$").unwrap());

fn file_size_limit() -> usize {
    dotenvy::dotenv().ok();
    std::env::var("FILE_SIZE_LIMIT")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(2 * 1024 * 1024)
}
