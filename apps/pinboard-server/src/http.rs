use std::time::Duration;

use axum::{body::Body, http::Request, routing::get, Router};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::field::Empty;

const REQUEST_ID_HEADER: &str = "x-request-id";
const BODY_LIMIT_BYTES: usize = 1024 * 1024;

async fn health_check() -> &'static str {
    "ok"
}

/// Wrap module routes with the shared middleware stack.
///
/// Outermost to innermost: SetRequestId -> Trace -> PropagateRequestId ->
/// Timeout -> BodyLimit.
pub fn build_router(routes: Router, timeout_sec: u64) -> Router {
    let x_request_id = axum::http::HeaderName::from_static(REQUEST_ID_HEADER);

    let mut router = routes.route("/health", get(health_check));

    router = router.layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES));

    if timeout_sec > 0 {
        router = router.layer(TimeoutLayer::new(Duration::from_secs(timeout_sec)));
    }

    router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));

    router = router.layer(TraceLayer::new_for_http().make_span_with(
        |req: &Request<Body>| {
            let rid = req
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("n/a");
            tracing::info_span!(
                "http_request",
                method = %req.method(),
                uri = %req.uri().path(),
                request_id = %rid,
                status = Empty,
                latency_ms = Empty
            )
        },
    ));

    router.layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}
