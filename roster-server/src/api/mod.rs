//! API routes for roster-server

pub mod employees;
pub mod health;

use axum::Router;
use axum::middleware as axum_middleware;
use axum::routing::{get, post};
use http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::middleware;
use crate::state::AppState;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/api/employees", post(employees::create_employee))
}

/// Cross-origin policy: one origin, credentials allowed
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Build the fully configured application with all middleware and state
pub fn build_app(state: AppState) -> Router {
    let request_id = HeaderName::from_static("x-request-id");

    build_router()
        // CORS - Handle cross-origin requests
        .layer(cors_layer(state.allowed_origin.clone()))
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response (inside SetRequestId so the id exists)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(request_id, XRequestId))
        .with_state(state)
}
