use axum::{
    body::Body,
    http::{Uri, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

use super::ApiError;
use crate::constants::messages::ENDPOINT_NOT_FOUND;

#[derive(RustEmbed)]
#[folder = "web"]
struct Asset;

/// Serves the embedded intake page. Anything else is a JSON 404.
pub async fn serve_asset(uri: Uri) -> Response {
    let mut path = uri.path().trim_start_matches('/').to_string();

    if path.is_empty() {
        path = "index.html".to_string();
    }

    match Asset::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                [(header::CONTENT_TYPE, mime.as_ref())],
                Body::from(content.data),
            )
                .into_response()
        }
        None => not_found().await.into_response(),
    }
}

pub async fn not_found() -> ApiError {
    ApiError::not_found(ENDPOINT_NOT_FOUND)
}
