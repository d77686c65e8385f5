use std::sync::Arc;
use std::time::Duration;

use spyglass_config::SpyglassConfig;
use spyglass_driver::UiDriver;

use crate::context::{ContextSwitcher, recovery_for};
use crate::wait::PollSpec;

/// Session-scoped bundle of the driver handle, the context switcher
/// and the configured wait defaults.
///
/// Created at session start, torn down at session end, and injected
/// into every component that needs driver access; there is no ambient
/// global state. The only shared mutable resource, the driver's active
/// context, is owned by the embedded [`ContextSwitcher`].
pub struct Session {
    driver: Arc<dyn UiDriver>,
    context: ContextSwitcher,
    wait: PollSpec,
    probe: PollSpec,
    web_settle: Duration,
}

impl Session {
    /// Build a session from configuration, wiring the platform's
    /// recovery strategy into the context switcher.
    pub fn new(driver: Arc<dyn UiDriver>, config: &SpyglassConfig) -> Self {
        let wait = PollSpec::from_millis(
            config.wait.condition_timeout_ms(),
            config.wait.poll_interval_ms(),
        );
        let probe = PollSpec::from_millis(
            config.wait.probe_timeout_ms(),
            config.wait.poll_interval_ms(),
        );

        let recovery = recovery_for(config.platform(), config.app.bundle_id());
        let context = ContextSwitcher::new(
            Arc::clone(&driver),
            recovery,
            config.app.webview_marker(),
            wait,
        );

        Self {
            driver,
            context,
            wait,
            probe,
            web_settle: Duration::from_millis(config.wait.web_settle_ms()),
        }
    }

    /// Build a session from pre-assembled parts. Useful when a caller
    /// needs a non-standard switcher or wait cadence.
    pub fn from_parts(
        driver: Arc<dyn UiDriver>,
        context: ContextSwitcher,
        wait: PollSpec,
        probe: PollSpec,
        web_settle: Duration,
    ) -> Self {
        Self {
            driver,
            context,
            wait,
            probe,
            web_settle,
        }
    }

    pub fn driver(&self) -> &dyn UiDriver {
        self.driver.as_ref()
    }

    pub fn context(&self) -> &ContextSwitcher {
        &self.context
    }

    /// Wait defaults for ordinary presence/absence conditions.
    pub fn wait_spec(&self) -> &PollSpec {
        &self.wait
    }

    /// Short wait used by identity probes.
    pub fn probe_spec(&self) -> &PollSpec {
        &self.probe
    }

    /// Settle pause applied before restoring the web context after an
    /// iOS native screen closes.
    pub fn web_settle(&self) -> Duration {
        self.web_settle
    }
}
