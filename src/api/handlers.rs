//! HTTP API handlers.

use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{ConnectInfo, State};
use axum::http::{header::USER_AGENT, HeaderMap, Method, Uri};
use axum::Json;
use chrono::{SecondsFormat, Utc};
use tracing::{debug, info, warn};

use super::types::{
    HealthResponse, RequestInfo, RuntimeInfo, ServiceInfoResponse, ENDPOINTS, SERVICE,
};
use crate::error::ApiError;
use crate::metrics;
use crate::system::{HostCollector, StartTime, SystemInfoCollector};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// When the service started.
    pub start_time: StartTime,
    /// Host snapshot source.
    pub collector: Arc<dyn SystemInfoCollector>,
}

impl AppState {
    /// State backed by the running host.
    pub fn new(start_time: StartTime) -> Self {
        Self::with_collector(start_time, HostCollector)
    }

    /// State with a custom collector.
    pub fn with_collector(
        start_time: StartTime,
        collector: impl SystemInfoCollector + 'static,
    ) -> Self {
        Self {
            start_time,
            collector: Arc::new(collector),
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("start_time", &self.start_time)
            .finish_non_exhaustive()
    }
}

/// Current UTC time, ISO-8601 with microseconds and a `+00:00` offset.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

/// Service, system and runtime metadata.
pub async fn service_info(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Json<ServiceInfoResponse>, ApiError> {
    info!("Received request: {} {}", method, uri.path());

    let system = state.collector.collect().map_err(|e| {
        metrics::inc_system_info_failures();
        ApiError::from(e)
    })?;
    let uptime = state.start_time.uptime();

    let response = ServiceInfoResponse {
        service: SERVICE,
        system,
        runtime: RuntimeInfo {
            uptime_seconds: uptime.seconds,
            uptime_human: uptime.human,
            current_time: utc_timestamp(),
            timezone: "UTC",
        },
        request: RequestInfo {
            client_ip: connect_info.map(|ConnectInfo(addr)| addr.ip().to_string()),
            user_agent: headers
                .get(USER_AGENT)
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned()),
            method: method.to_string(),
            path: uri.path().to_string(),
        },
        endpoints: &ENDPOINTS,
    };

    debug!(?response, "Response payload");
    Ok(Json(response))
}

/// Liveness check - always healthy while the process answers.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime = state.start_time.uptime();
    info!("Health check requested");

    Json(HealthResponse {
        status: "healthy",
        timestamp: utc_timestamp(),
        uptime_seconds: uptime.seconds,
    })
}

/// Fallback for unmatched routes.
pub async fn not_found(uri: Uri) -> ApiError {
    warn!("404 Not Found: {}", uri);
    ApiError::NotFound {
        path: uri.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::mock::{sample_info, MockCollector};

    #[test]
    fn timestamp_is_utc_iso8601() {
        let ts = utc_timestamp();
        assert!(ts.ends_with("+00:00"), "{ts}");
        assert!(chrono::DateTime::parse_from_rfc3339(&ts).is_ok());
    }

    #[tokio::test]
    async fn health_reports_uptime() {
        let state = AppState::with_collector(StartTime::now(), MockCollector::healthy(sample_info()));
        let Json(body) = health(State(state)).await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.uptime_seconds, 0);
    }

    #[tokio::test]
    async fn service_info_collects_fresh_each_call() {
        let collector = MockCollector::healthy(sample_info());
        let state = AppState::with_collector(StartTime::now(), collector.clone());

        for _ in 0..2 {
            let result = service_info(
                State(state.clone()),
                None,
                Method::GET,
                Uri::from_static("/"),
                HeaderMap::new(),
            )
            .await;
            assert!(result.is_ok());
        }

        assert_eq!(collector.calls(), 2);
    }

    #[tokio::test]
    async fn service_info_propagates_collector_failure() {
        let state = AppState::with_collector(StartTime::now(), MockCollector::failing());
        let result = service_info(
            State(state),
            None,
            Method::GET,
            Uri::from_static("/"),
            HeaderMap::new(),
        )
        .await;

        assert!(matches!(result, Err(ApiError::Internal(_))));
    }
}
