//! Host information collection.

use serde::Serialize;
use sysinfo::{CpuRefreshKind, RefreshKind, System};
use tracing::debug;

use crate::error::SystemInfoError;

/// Version of the rustc toolchain that built this binary.
pub const RUNTIME_VERSION: &str = env!("DEVOPS_INFO_RUSTC_VERSION");

/// Point-in-time snapshot of the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    /// Hostname.
    pub hostname: String,
    /// OS family (e.g., "Linux", "Darwin", "Windows").
    pub platform: String,
    /// Kernel or OS version string.
    pub platform_version: String,
    /// CPU architecture (e.g., "x86_64", "aarch64").
    pub architecture: String,
    /// Logical processors; null when the platform does not report any.
    pub cpu_count: Option<usize>,
    /// Rust toolchain version.
    pub runtime_version: String,
}

/// Source of [`SystemInfo`] snapshots.
pub trait SystemInfoCollector: Send + Sync {
    /// Collect a fresh snapshot. Implementations must not cache.
    fn collect(&self) -> Result<SystemInfo, SystemInfoError>;
}

/// Collector backed by the running host.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostCollector;

impl SystemInfoCollector for HostCollector {
    fn collect(&self) -> Result<SystemInfo, SystemInfoError> {
        let hostname = System::host_name().ok_or(SystemInfoError::HostnameUnavailable)?;

        let info = SystemInfo {
            hostname,
            platform: platform_name(std::env::consts::OS),
            platform_version: System::kernel_version()
                .or_else(System::os_version)
                .unwrap_or_default(),
            architecture: std::env::consts::ARCH.to_string(),
            cpu_count: logical_cpu_count(),
            runtime_version: RUNTIME_VERSION.to_string(),
        };

        debug!(?info, "System info collected");
        Ok(info)
    }
}

fn logical_cpu_count() -> Option<usize> {
    let sys = System::new_with_specifics(RefreshKind::new().with_cpu(CpuRefreshKind::new()));
    match sys.cpus().len() {
        0 => None,
        n => Some(n),
    }
}

/// Map a Rust target OS to the name the kernel family goes by.
pub fn platform_name(os: &str) -> String {
    match os {
        "linux" | "android" => "Linux".to_string(),
        "macos" | "ios" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        other => other.to_string(),
    }
}
