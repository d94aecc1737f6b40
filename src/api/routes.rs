//! HTTP API route definitions.

use std::any::Any;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{health, not_found, service_info, AppState};
use crate::error::ApiError;
use crate::metrics;

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .with_state(state);

    with_error_handling(routes)
}

/// Fallback, metrics, tracing and panic handling shared by every route.
fn with_error_handling(router: Router) -> Router {
    router
        .fallback(not_found)
        .layer(middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
}

async fn track_metrics(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let endpoint = metrics::endpoint_label(request.uri().path());

    let response = next.run(request).await;
    metrics::record_http_request(start, endpoint, response.status().as_u16());
    response
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(format!("handler panicked: {}", detail)).into_response()
}
