//! Process start time and uptime reporting.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Moment the service started, captured once at startup.
#[derive(Debug, Clone, Copy)]
pub struct StartTime {
    /// Wall-clock start, UTC.
    pub at: DateTime<Utc>,
    monotonic: Instant,
}

impl StartTime {
    /// Capture the current instant as the start time.
    pub fn now() -> Self {
        Self {
            at: Utc::now(),
            monotonic: Instant::now(),
        }
    }

    /// Elapsed time since start. Never goes backwards within a run.
    pub fn elapsed(&self) -> Duration {
        self.monotonic.elapsed()
    }

    /// Current uptime report.
    pub fn uptime(&self) -> Uptime {
        let uptime = Uptime::from_seconds(self.elapsed().as_secs());
        debug!("Calculated uptime: {} seconds", uptime.seconds);
        uptime
    }
}

/// Uptime in whole seconds plus a readable form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Uptime {
    /// Whole seconds since start.
    pub seconds: u64,
    /// "<H> hours, <M> minutes".
    pub human: String,
}

impl Uptime {
    /// Build a report from a second count. Hours are not rolled into days.
    pub fn from_seconds(seconds: u64) -> Self {
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        Self {
            seconds,
            human: format!("{} hours, {} minutes", hours, minutes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn human_form_uses_integer_division() {
        assert_eq!(Uptime::from_seconds(5400).human, "1 hours, 30 minutes");
        assert_eq!(Uptime::from_seconds(0).human, "0 hours, 0 minutes");
        assert_eq!(Uptime::from_seconds(59).human, "0 hours, 0 minutes");
        assert_eq!(Uptime::from_seconds(3599).human, "0 hours, 59 minutes");
    }

    #[test]
    fn hours_grow_past_a_day() {
        let uptime = Uptime::from_seconds(3 * 86_400 + 125);
        assert_eq!(uptime.human, "72 hours, 2 minutes");
        assert_eq!(uptime.seconds, 259_325);
    }

    #[test]
    fn uptime_is_non_decreasing() {
        let start = StartTime::now();
        let first = start.uptime();
        sleep(Duration::from_millis(20));
        let second = start.uptime();
        assert!(second.seconds >= first.seconds);
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn fresh_start_reports_zero() {
        let uptime = StartTime::now().uptime();
        assert_eq!(uptime.seconds, 0);
        assert_eq!(uptime.human, "0 hours, 0 minutes");
    }
}
