//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request span with method, uri, status and latency)
//! 3. Request ID (recorded on the span, echoed in the response)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
