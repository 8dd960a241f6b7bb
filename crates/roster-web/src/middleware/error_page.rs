//! Renders HTML error pages for failed requests.

use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use roster_core::ErrorResponse;

/// Replaces the body of an error response with the rendered error page,
/// keeping its status and headers.
///
/// Responses carrying an [`ErrorResponse`] extension use its message. Other
/// 4xx/5xx responses without a content type, such as the router's 405, get
/// the status reason. Typed bodies like the readiness JSON pass through.
pub async fn error_page_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let status = response.status();

    let message = match response.extensions_mut().remove::<ErrorResponse>() {
        Some(error) => error.message,
        None if (status.is_client_error() || status.is_server_error())
            && !response.headers().contains_key(header::CONTENT_TYPE) =>
        {
            status.canonical_reason().unwrap_or("Error").to_string()
        }
        None => return response,
    };

    let html = state.ssr.render_error(status.as_u16(), &message);
    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );
    Response::from_parts(parts, Body::from(html))
}
