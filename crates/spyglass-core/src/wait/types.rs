use std::time::Duration;

/// Budget and cadence for one polling invocation.
///
/// Immutable per invocation; built from the process-wide configured
/// defaults when a call site does not override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSpec {
    timeout: Duration,
    interval: Duration,
}

impl PollSpec {
    pub fn new(timeout: Duration, interval: Duration) -> Self {
        Self { timeout, interval }
    }

    pub fn from_millis(timeout_ms: u64, interval_ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(timeout_ms),
            interval: Duration::from_millis(interval_ms),
        }
    }

    /// Per-call timeout override, keeping the configured poll cadence.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }
}
