//! HTTP-level middleware applied to every route.
//!
//! Only request correlation and access logging live here. The token
//! endpoint answers every failure itself as 400 `{message}`, so nothing in
//! this stack may short-circuit with a status of its own:
//! - no inbound timeout: the Direct Line client's own timeout bounds the
//!   one slow operation and surfaces as a transport error
//! - no body limit: request bodies are never read

use axum::Router;
use axum::http::header::HeaderName;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// Apply HTTP-level middleware to the given Router.
///
/// Request-Id header: `x-request-id` (kept when the caller sends one).
pub fn apply(router: Router) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    let layers = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(
            request_id_header.clone(),
            MakeRequestUuid,
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header))
        // Runs inside the request-id layers so the id is on the span's request.
        .layer(TraceLayer::new_for_http());

    router.layer(layers)
}
