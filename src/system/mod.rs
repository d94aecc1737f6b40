//! Read-only host and process introspection.

pub mod info;
pub mod mock;
pub mod uptime;

pub use info::{HostCollector, SystemInfo, SystemInfoCollector};
pub use mock::MockCollector;
pub use uptime::{StartTime, Uptime};
