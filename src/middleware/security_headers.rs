//! Response headers for browser callers of the token endpoint.
//!
//! Responses are JSON carrying a live bearer token, so only the headers that
//! matter for that are set:
//! - `cache-control: no-store`: a token minted for one caller must never be
//!   served from a shared cache to another
//! - `x-content-type-options: nosniff`: the body is always `application/json`
//! - `referrer-policy: no-referrer`: the widget page URL stays with the browser

use axum::Router;
use axum::http::header::{self, HeaderValue};
use tower_http::set_header::SetResponseHeaderLayer;

/// Apply the response headers to all routes.
///
/// `if_not_present` lets a handler override a header when it has reason to.
pub fn apply(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("no-referrer"),
        ))
}
