//! Request ID middleware for request tracing and correlation.
//!
//! The mobile app and any proxy in front of the service may send an
//! `x-request-id`; otherwise a UUID v4 is generated. The ID ends up on the
//! request span, as a Sentry tag, on the request seen by handlers and on the
//! response.

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest client-supplied ID that is accepted as is.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Pick the incoming ID if it is usable, else mint one.
fn resolve_request_id(incoming: Option<&HeaderValue>) -> HeaderValue {
    incoming
        .filter(|value| !value.is_empty() && value.len() <= MAX_REQUEST_ID_LEN)
        .filter(|value| value.to_str().is_ok())
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        })
}

/// Middleware that ensures every request has a unique request ID.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let header = HeaderName::from_static(REQUEST_ID_HEADER);
    let request_id = resolve_request_id(request.headers().get(&header));
    let request_id_str = request_id.to_str().unwrap_or_default().to_owned();

    Span::current().record("request_id", request_id_str.as_str());

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id_str);
    });

    request.headers_mut().insert(header.clone(), request_id.clone());

    let mut response = next.run(request).await;
    response.headers_mut().insert(header, request_id);
    response
}
