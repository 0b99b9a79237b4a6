//! JSON body extractor with `ApiError` rejections.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// Same as `axum::Json`, but malformed bodies are rejected with the
/// `{error, message}` error body instead of axum's plain-text response.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
