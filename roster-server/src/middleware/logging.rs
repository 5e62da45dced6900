//! Request logging middleware
//!
//! Every request runs inside an `http` span carrying its request id, route
//! and caller origin; completion is logged once, at a level picked from the
//! response status.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use http::{StatusCode, header};
use tracing::{Instrument, Level};

/// 5xx → ERROR, 4xx → WARN, anything else → INFO
pub fn completion_level(status: StatusCode) -> Level {
    if status.is_server_error() {
        Level::ERROR
    } else if status.is_client_error() {
        Level::WARN
    } else {
        Level::INFO
    }
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| req.uri().path().to_owned(), |p| p.as_str().to_owned());
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();

    let span = tracing::info_span!(
        "http",
        %request_id,
        method = %req.method(),
        %route,
        %origin,
    );

    async move {
        let start = Instant::now();
        let response = next.run(req).await;
        let status = response.status().as_u16();
        let latency_ms = start.elapsed().as_millis() as u64;

        let level = completion_level(response.status());
        if level == Level::ERROR {
            tracing::error!(status, latency_ms, "Request failed");
        } else if level == Level::WARN {
            tracing::warn!(status, latency_ms, "Request rejected");
        } else {
            tracing::info!(status, latency_ms, "Request completed");
        }
        response
    }
    .instrument(span)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_follows_status_class() {
        assert_eq!(completion_level(StatusCode::CREATED), Level::INFO);
        assert_eq!(completion_level(StatusCode::NO_CONTENT), Level::INFO);
        assert_eq!(completion_level(StatusCode::BAD_REQUEST), Level::WARN);
        assert_eq!(completion_level(StatusCode::INTERNAL_SERVER_ERROR), Level::ERROR);
        assert_eq!(completion_level(StatusCode::SERVICE_UNAVAILABLE), Level::ERROR);
    }
}
