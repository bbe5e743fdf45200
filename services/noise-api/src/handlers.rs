//! HTTP request handlers.

use std::fmt::Display;
use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::state::{AppState, IMAGE_HEIGHT, IMAGE_WIDTH};

/// GET /favicon.ico - icon generated at startup
pub async fn favicon_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static("image/x-icon"))],
        state.favicon.clone(),
    )
        .into_response()
}

/// Any other path - a freshly generated noise PNG
pub async fn image_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let encoded = tokio::task::spawn_blocking(move || {
        let raster = state.generate_image(IMAGE_WIDTH, IMAGE_HEIGHT);
        renderer::png::encode(&raster)
    })
    .await;

    match encoded {
        Ok(Ok(png)) => png_response(png),
        Ok(Err(e)) => {
            error!(error = %e, "failed to encode PNG image");
            encode_failure(e)
        }
        Err(e) => {
            error!(error = %e, "image generation task failed");
            encode_failure(e)
        }
    }
}

fn png_response(png: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("image/png")),
            (header::CONTENT_LENGTH, HeaderValue::from(png.len())),
        ],
        png,
    )
        .into_response()
}

/// 500 with a plain-text description of the failure
pub fn encode_failure(err: impl Display) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"))],
        format!("Failed to encode image: {}", err),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_failure_response() {
        let response = encode_failure("IDAT compression failed: disk on fire");
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            HeaderValue::from_static("text/plain")
        );
    }

    #[test]
    fn test_png_response_headers() {
        let response = png_response(vec![0u8; 42]);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert_eq!(response.headers()[header::CONTENT_LENGTH], "42");
    }
}
