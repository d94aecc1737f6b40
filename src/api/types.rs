//! Response payloads.

use serde::Serialize;

use crate::system::SystemInfo;

/// Static description of this service.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceMeta {
    /// Service name.
    pub name: &'static str,
    /// Crate version.
    pub version: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// HTTP framework label.
    pub framework: &'static str,
}

/// Metadata reported under `service`.
pub const SERVICE: ServiceMeta = ServiceMeta {
    name: "devops-info-service",
    version: env!("CARGO_PKG_VERSION"),
    description: "DevOps course info service",
    framework: "Axum",
};

/// One routable endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EndpointInfo {
    /// Route path.
    pub path: &'static str,
    /// HTTP method.
    pub method: &'static str,
    /// What it returns.
    pub description: &'static str,
}

/// Every route the service answers, in display order.
pub const ENDPOINTS: [EndpointInfo; 2] = [
    EndpointInfo {
        path: "/",
        method: "GET",
        description: "Service information",
    },
    EndpointInfo {
        path: "/health",
        method: "GET",
        description: "Health check",
    },
];

/// Runtime block of the root response.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeInfo {
    /// Whole seconds since start.
    pub uptime_seconds: u64,
    /// "<H> hours, <M> minutes".
    pub uptime_human: String,
    /// ISO-8601 UTC timestamp at request time.
    pub current_time: String,
    /// Always "UTC".
    pub timezone: &'static str,
}

/// Echo of the incoming request.
#[derive(Debug, Clone, Serialize)]
pub struct RequestInfo {
    /// Peer address, if known.
    pub client_ip: Option<String>,
    /// `User-Agent` header, if sent.
    pub user_agent: Option<String>,
    /// HTTP method.
    pub method: String,
    /// Request path.
    pub path: String,
}

/// Root (`GET /`) response.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfoResponse {
    pub service: ServiceMeta,
    pub system: SystemInfo,
    pub runtime: RuntimeInfo,
    pub request: RequestInfo,
    pub endpoints: &'static [EndpointInfo],
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always "healthy".
    pub status: &'static str,
    /// ISO-8601 UTC timestamp at request time.
    pub timestamp: String,
    /// Whole seconds since start.
    pub uptime_seconds: u64,
}
