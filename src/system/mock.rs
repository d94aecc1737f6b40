//! Mock collector for unit and integration testing.
//!
//! Returns a fixed snapshot or a fixed failure without touching the host.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::SystemInfoError;

use super::info::{SystemInfo, SystemInfoCollector};

/// Collector with a scripted outcome.
#[derive(Debug, Clone)]
pub struct MockCollector {
    outcome: Result<SystemInfo, SystemInfoError>,
    calls: Arc<AtomicU64>,
}

impl MockCollector {
    /// Always returns `info`.
    pub fn healthy(info: SystemInfo) -> Self {
        Self {
            outcome: Ok(info),
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Always fails the hostname lookup.
    pub fn failing() -> Self {
        Self {
            outcome: Err(SystemInfoError::HostnameUnavailable),
            calls: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of `collect` calls so far, across clones.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SystemInfoCollector for MockCollector {
    fn collect(&self) -> Result<SystemInfo, SystemInfoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

/// A plausible Linux snapshot.
pub fn sample_info() -> SystemInfo {
    SystemInfo {
        hostname: "info-test-host".to_string(),
        platform: "Linux".to_string(),
        platform_version: "6.8.0-generic".to_string(),
        architecture: "x86_64".to_string(),
        cpu_count: Some(8),
        runtime_version: "1.83.0".to_string(),
    }
}
