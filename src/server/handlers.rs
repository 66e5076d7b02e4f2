use axum::body::Bytes;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

pub async fn root() -> &'static str {
    super::ROOT_BODY
}

/// Returns the request body unchanged, preserving the caller's content-type.
/// A request without a content-type header gets a response without one; no
/// default is synthesized.
pub async fn echo(headers: HeaderMap, body: Bytes) -> Response {
    let mut response = (StatusCode::OK, body).into_response();
    match headers.get(header::CONTENT_TYPE) {
        Some(content_type) => {
            response
                .headers_mut()
                .insert(header::CONTENT_TYPE, content_type.clone());
        }
        None => {
            response.headers_mut().remove(header::CONTENT_TYPE);
        }
    }
    response
}
