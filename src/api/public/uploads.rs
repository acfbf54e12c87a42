use axum::{
    extract::{Extension, Path},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::api::error_response;
use crate::store::SharedState;

//ROUTERS
pub fn uploads_router(state: SharedState) -> Router {
    Router::new()
        .route("/image/:id", get(print_image))
        .layer(Extension(state))
}

//ROUTES
pub async fn print_image(
    Path(id): Path<String>,
    Extension(state): Extension<SharedState>,
) -> Response {
    let state = state.read().await;
    match state.image(&id) {
        Ok(image) => {
            let mut headers = HeaderMap::new();
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_str(&image.content_type)
                    .unwrap_or(HeaderValue::from_static("application/octet-stream")),
            );
            headers.insert(
                header::CONTENT_DISPOSITION,
                HeaderValue::from_static("inline"),
            );
            (StatusCode::OK, headers, image.data.clone()).into_response()
        }
        Err(err) => error_response(err).into_response(),
    }
}
